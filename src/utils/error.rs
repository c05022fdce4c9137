use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown {section} field: {field}")]
    UnknownFieldError { section: String, field: String },

    #[error("{list} index {index} out of range (length {len})")]
    IndexOutOfRangeError {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Image '{file}' is {size} bytes, larger than the {limit} byte limit")]
    ImageTooLargeError { file: String, size: u64, limit: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Input,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::IoError(_) => ErrorCategory::Storage,
            PortfolioError::SerializationError(_) => ErrorCategory::Internal,
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PortfolioError::UnknownFieldError { .. }
            | PortfolioError::IndexOutOfRangeError { .. }
            | PortfolioError::ImageTooLargeError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 只是警告，資料不變
            PortfolioError::ImageTooLargeError { .. } => ErrorSeverity::Low,
            PortfolioError::UnknownFieldError { .. }
            | PortfolioError::IndexOutOfRangeError { .. } => ErrorSeverity::Medium,
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorSeverity::High,
            PortfolioError::IoError(_) | PortfolioError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read or write a file: {}", e),
            PortfolioError::SerializationError(_) => {
                "The portfolio record could not be encoded".to_string()
            }
            PortfolioError::ImageTooLargeError { limit, .. } => format!(
                "File too large. Please select a file smaller than {}MB.",
                limit / (1024 * 1024)
            ),
            PortfolioError::IndexOutOfRangeError { list, index, len } => {
                format!("There is no {} entry #{} (only {} present)", list, index, len)
            }
            other => other.to_string(),
        }
    }

    /// Non-fatal: reported to the user as a warning, the record is unchanged.
    pub fn is_warning(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    /// Process exit code for the binaries. `Low` is a warning and still exits 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags or the TOML config file and try again"
            }
            ErrorCategory::Storage => {
                "Make sure the data and output directories exist and are writable"
            }
            ErrorCategory::Input => match self {
                PortfolioError::ImageTooLargeError { .. } => {
                    "Resize or compress the image, or use an image URL instead"
                }
                PortfolioError::IndexOutOfRangeError { .. } => {
                    "Run `show` to list the current entries and their positions"
                }
                PortfolioError::UnknownFieldError { .. } => {
                    "Use one of the documented field names (see --help)"
                }
                _ => "Correct the input and try again",
            },
            ErrorCategory::Internal => "Please report this problem with the --verbose log",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_image_is_a_low_severity_input_error() {
        let err = PortfolioError::ImageTooLargeError {
            file: "me.png".to_string(),
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("smaller than 5MB"));
        assert!(err.is_warning());
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = PortfolioError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_warning());
    }

    #[test]
    fn test_index_error_message() {
        let err = PortfolioError::IndexOutOfRangeError {
            list: "skill",
            index: 4,
            len: 3,
        };

        assert_eq!(err.to_string(), "skill index 4 out of range (length 3)");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_input_errors_each_have_a_specific_suggestion() {
        let unknown = PortfolioError::UnknownFieldError {
            section: "theme".to_string(),
            field: "borderColor".to_string(),
        };

        assert_eq!(unknown.category(), ErrorCategory::Input);
        assert_eq!(unknown.exit_code(), 2);
        assert!(unknown.recovery_suggestion().contains("field names"));
        assert_eq!(unknown.to_string(), "Unknown theme field: borderColor");
    }
}
