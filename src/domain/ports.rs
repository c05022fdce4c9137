use crate::domain::model::{ExportDocument, PortfolioData};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level key/file storage. Keys are relative paths under the backend's root.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Persistence for the single portfolio record.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Returns the stored record, or the seed record when nothing is stored yet.
    async fn load(&self) -> Result<PortfolioData>;
    /// Replaces the stored record wholesale.
    async fn save(&self, data: &PortfolioData) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn store_key(&self) -> &str;
    fn output_path(&self) -> &str;
    fn file_name_override(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PortfolioData>;
    async fn transform(&self, data: PortfolioData) -> Result<ExportDocument>;
    async fn load(&self, document: ExportDocument) -> Result<String>;
}
