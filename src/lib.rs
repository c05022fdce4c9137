pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use core::{
    editor::Editor,
    engine::ExportEngine,
    export::{export_file_name, ExportPipeline},
    generator::{generate, generate_for_year},
    image::ImageUpload,
    store::JsonPortfolioStore,
};
pub use domain::model::{ExportDocument, PortfolioData};
pub use utils::error::{PortfolioError, Result};
