pub mod editor;
pub mod engine;
pub mod escape;
pub mod export;
pub mod generator;
pub mod image;
pub mod store;

pub use crate::domain::model::{ExportDocument, PortfolioData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PortfolioStore, Storage};
pub use crate::utils::error::Result;
