pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::store::DEFAULT_STORE_KEY;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{ExperienceField, PersonalField, ProjectField, ThemeField};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
pub const BYTES_PER_MB: u64 = 1024 * 1024;
#[cfg(feature = "cli")]
pub const MAX_UPLOAD_MB_CEILING: u64 = 50;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-maker")]
#[command(about = "Edit a portfolio and export it as a standalone HTML page")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = "./portfolio-data")]
    pub data_dir: String,

    #[arg(long, global = true, default_value = DEFAULT_STORE_KEY)]
    pub store_key: String,

    #[arg(long, global = true, default_value = "./output")]
    pub output_path: String,

    #[arg(long, global = true, help = "Export file name instead of <name>-portfolio.html")]
    pub file_name: Option<String>,

    #[arg(long, global = true, default_value = "5")]
    pub max_upload_mb: u64,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, global = true, help = "Report CPU and memory during export")]
    pub monitor: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the stored portfolio as JSON
    Show,
    /// Replace the stored portfolio with the seed data
    Reset,
    /// Set a personal field (name, title, about, photo, email, phone, location, socialMedia.linkedin|github|twitter)
    Set { field: PersonalField, value: String },
    /// Set a theme colour (primaryColor, textColor, backgroundColor, accentColor)
    Theme { field: ThemeField, value: String },
    /// Upload a profile photo from a local image file
    Photo { file: PathBuf },
    /// Add, update or remove skills
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },
    /// Add, update, re-image or remove projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Add, update or remove work experience
    Experience {
        #[command(subcommand)]
        action: ExperienceAction,
    },
    /// Print the generated HTML document to stdout
    Preview,
    /// Generate the HTML document and write it to the output path
    Export,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum SkillAction {
    Add,
    Update {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,
    },
    Remove { index: usize },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum ProjectAction {
    Add,
    /// Set title, description, image or link
    Update {
        index: usize,
        field: ProjectField,
        value: String,
    },
    /// Upload a project image from a local file
    Image { index: usize, file: PathBuf },
    Remove { index: usize },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum ExperienceAction {
    Add,
    /// Set company, position, date or description
    Update {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Remove { index: usize },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn store_path(&self) -> &str {
        &self.data_dir
    }

    fn store_key(&self) -> &str {
        &self.store_key
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn file_name_override(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Size limit for `photo` and `project image` uploads.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * BYTES_PER_MB
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_store_key("store_key", &self.store_key)?;
        if let Some(file_name) = &self.file_name {
            validation::validate_html_file_name("file_name", file_name)?;
        }
        validation::validate_range("max_upload_mb", self.max_upload_mb, 1, MAX_UPLOAD_MB_CEILING)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::try_parse_from(["portfolio-maker", "export"]).unwrap();

        assert_eq!(config.store_path(), "./portfolio-data");
        assert_eq!(config.store_key(), "portfolio-data");
        assert_eq!(config.max_upload_bytes(), 5 * 1024 * 1024);
        assert!(matches!(config.command, Command::Export));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_nested_field_names() {
        let config = CliConfig::try_parse_from([
            "portfolio-maker",
            "set",
            "socialMedia.github",
            "https://github.com/ada",
            "--data-dir",
            "/tmp/p",
        ])
        .unwrap();

        match config.command {
            Command::Set { field, value } => {
                assert_eq!(field, PersonalField::Github);
                assert_eq!(value, "https://github.com/ada");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(config.data_dir, "/tmp/p");
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let result = CliConfig::try_parse_from(["portfolio-maker", "theme", "borderColor", "#000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_skill_update_flags() {
        let config = CliConfig::try_parse_from([
            "portfolio-maker",
            "skill",
            "update",
            "2",
            "--level",
            "80",
        ])
        .unwrap();

        assert!(matches!(
            config.command,
            Command::Skill {
                action: SkillAction::Update { index: 2, name: None, level: Some(80) }
            }
        ));
    }

    #[test]
    fn test_upload_limit_flag() {
        let config =
            CliConfig::try_parse_from(["portfolio-maker", "photo", "me.png", "--max-upload-mb", "2"])
                .unwrap();

        assert_eq!(config.max_upload_bytes(), 2 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_limits_and_names() {
        let mut config = CliConfig::try_parse_from(["portfolio-maker", "show"]).unwrap();
        config.max_upload_mb = 0;
        assert!(config.validate().is_err());

        config.max_upload_mb = 5;
        config.file_name = Some("page.txt".to_string());
        assert!(config.validate().is_err());
    }
}
