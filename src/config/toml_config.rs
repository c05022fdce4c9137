use crate::core::store::DEFAULT_STORE_KEY;
use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for `toml-export`. Image uploads only happen through the editor CLI,
/// so the upload limit is a `portfolio-maker` flag and has no section here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    pub export: ExportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_store_key("store.key", self.store_key())?;

        let output_path = validation::validate_required_field("export.output_path", &self.export.output_path)?;
        validation::validate_path("export.output_path", output_path)?;

        if let Some(file_name) = &self.export.file_name {
            validation::validate_html_file_name("export.file_name", file_name)?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_level.as_deref())
            .unwrap_or("info")
    }
}

impl ConfigProvider for TomlConfig {
    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn store_key(&self) -> &str {
        self.store.key.as_deref().unwrap_or(DEFAULT_STORE_KEY)
    }

    fn output_path(&self) -> &str {
        self.export.output_path.as_deref().unwrap_or("./output")
    }

    fn file_name_override(&self) -> Option<&str> {
        self.export.file_name.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[store]
path = "./data"

[export]
output_path = "./site"
file_name = "index.html"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store_path(), "./data");
        assert_eq!(config.store_key(), "portfolio-data");
        assert_eq!(config.output_path(), "./site");
        assert_eq!(config.file_name_override(), Some("index.html"));
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_OUTPUT", "/srv/www");

        let toml_content = r#"
[store]
path = "./data"
key = "${PORTFOLIO_TEST_UNSET_KEY}"

[export]
output_path = "${PORTFOLIO_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/srv/www");
        assert_eq!(config.store_key(), "${PORTFOLIO_TEST_UNSET_KEY}");

        std::env::remove_var("PORTFOLIO_TEST_OUTPUT");
    }

    #[test]
    fn test_missing_output_path_fails_validation() {
        let toml_content = r#"
[store]
path = "./data"

[export]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_bad_export_file_name_fails_validation() {
        let toml_content = r#"
[store]
path = "./data"

[export]
output_path = "./out"
file_name = "index.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[store\npath = 1").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[store]
path = "./from-file"

[export]
output_path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store_path(), "./from-file");
        assert!(!config.monitoring_enabled());
    }
}
