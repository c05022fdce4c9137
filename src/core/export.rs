use crate::core::generator;
use crate::core::{ConfigProvider, Pipeline, PortfolioData, PortfolioStore, Storage};
use crate::domain::model::ExportDocument;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

const FILE_SUFFIX: &str = "-portfolio.html";

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s/\\]+").expect("static regex"))
}

/// Suggested download name: `"Jane  Doe"` becomes `jane-doe-portfolio.html`.
pub fn export_file_name(name: &str) -> String {
    // 名稱會變成檔名：去掉首尾空白，避免產生 "-portfolio.html" 或開頭為 "-" 的路徑
    let slug = whitespace_runs()
        .replace_all(name.trim(), "-")
        .to_lowercase();

    if slug.is_empty() {
        "portfolio.html".to_string()
    } else {
        format!("{}{}", slug, FILE_SUFFIX)
    }
}

pub fn build_document(data: &PortfolioData) -> ExportDocument {
    ExportDocument {
        file_name: export_file_name(&data.personal.name),
        html: generator::generate(data),
    }
}

/// Snapshot from the store, render, write to output storage.
pub struct ExportPipeline<P: PortfolioStore, S: Storage, C: ConfigProvider> {
    store: P,
    output: S,
    config: C,
}

impl<P: PortfolioStore, S: Storage, C: ConfigProvider> ExportPipeline<P, S, C> {
    pub fn new(store: P, output: S, config: C) -> Self {
        Self {
            store,
            output,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<P: PortfolioStore, S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<P, S, C> {
    async fn extract(&self) -> Result<PortfolioData> {
        tracing::debug!(
            "Reading portfolio '{}' from {}",
            self.config.store_key(),
            self.config.store_path()
        );
        self.store.load().await
    }

    async fn transform(&self, data: PortfolioData) -> Result<ExportDocument> {
        let mut document = build_document(&data);

        if let Some(file_name) = self.config.file_name_override() {
            tracing::debug!("Using configured file name '{}'", file_name);
            document.file_name = file_name.to_string();
        }

        Ok(document)
    }

    async fn load(&self, document: ExportDocument) -> Result<String> {
        self.output
            .write_file(&document.file_name, document.html.as_bytes())
            .await?;

        let output_path = std::path::Path::new(self.config.output_path())
            .join(&document.file_name)
            .display()
            .to_string();
        tracing::debug!("Wrote {} bytes to {}", document.html.len(), output_path);
        Ok(output_path)
    }
}
