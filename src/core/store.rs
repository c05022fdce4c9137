use crate::core::{PortfolioData, PortfolioStore, Storage};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;

pub const DEFAULT_STORE_KEY: &str = "portfolio-data";

/// Keeps the portfolio as one pretty-printed JSON record at `{key}.json`.
#[derive(Debug, Clone)]
pub struct JsonPortfolioStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> JsonPortfolioStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn record_path(&self) -> String {
        format!("{}.json", self.key)
    }
}

#[async_trait]
impl<S: Storage> PortfolioStore for JsonPortfolioStore<S> {
    async fn load(&self) -> Result<PortfolioData> {
        let path = self.record_path();

        let bytes = match self.storage.read_file(&path).await {
            Ok(bytes) => bytes,
            Err(PortfolioError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No portfolio stored under '{}', starting from seed data", self.key);
                return Ok(PortfolioData::seed());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_slice(&bytes) {
            Ok(data) => {
                tracing::debug!("Loaded portfolio record '{}' ({} bytes)", path, bytes.len());
                Ok(data)
            }
            Err(e) => {
                // 與瀏覽器版相同：壞掉的紀錄退回預設值
                tracing::warn!(
                    "Portfolio record '{}' is not valid JSON ({}), falling back to seed data",
                    path,
                    e
                );
                Ok(PortfolioData::seed())
            }
        }
    }

    async fn save(&self, data: &PortfolioData) -> Result<()> {
        let json = serde_json::to_vec_pretty(data)?;
        self.storage.write_file(&self.record_path(), &json).await?;
        tracing::debug!("Saved portfolio record '{}' ({} bytes)", self.record_path(), json.len());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    pub(crate) struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        pub(crate) async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PortfolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_first_load_returns_seed() {
        let store = JsonPortfolioStore::new(MockStorage::new(), DEFAULT_STORE_KEY);

        let data = store.load().await.unwrap();

        assert_eq!(data, PortfolioData::seed());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let storage = MockStorage::new();
        let store = JsonPortfolioStore::new(storage.clone(), DEFAULT_STORE_KEY);

        let mut data = PortfolioData::seed();
        data.personal.name = "Grace Hopper".to_string();
        data.skills.clear();
        store.save(&data).await.unwrap();

        assert!(storage.get_file("portfolio-data.json").await.is_some());
        assert_eq!(store.load().await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_corrupt_record_falls_back_to_seed() {
        let storage = MockStorage::new();
        storage.put_file("portfolio-data.json", b"{not json").await;
        let store = JsonPortfolioStore::new(storage, DEFAULT_STORE_KEY);

        assert_eq!(store.load().await.unwrap(), PortfolioData::seed());
    }

    #[tokio::test]
    async fn test_custom_key_selects_record() {
        let storage = MockStorage::new();
        let store = JsonPortfolioStore::new(storage.clone(), "alt");

        store.save(&PortfolioData::default()).await.unwrap();

        assert!(storage.get_file("alt.json").await.is_some());
        assert!(storage.get_file("portfolio-data.json").await.is_none());
    }
}
