use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripCostError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Background task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TripCostError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TripCostError::IoError(_) | TripCostError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            TripCostError::ConfigError { .. } | TripCostError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TripCostError::TaskJoinError(_) => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 設定檔損毀只影響主題偏好，仍可重試
            TripCostError::SerializationError(_) => ErrorSeverity::Medium,
            TripCostError::IoError(_) => ErrorSeverity::High,
            TripCostError::ConfigError { .. } | TripCostError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            TripCostError::TaskJoinError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TripCostError::IoError(e) => format!("Could not access the settings store: {}", e),
            TripCostError::SerializationError(_) => {
                "The settings file is corrupted and could not be read".to_string()
            }
            TripCostError::ConfigError { message } => format!("Configuration problem: {}", message),
            TripCostError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            TripCostError::TaskJoinError(_) => "A background task stopped unexpectedly".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Storage => {
                "Check that the settings directory exists and is writable, or delete settings.json to reset it"
            }
            ErrorCategory::Configuration => "Review the TOML configuration file and command-line flags",
            ErrorCategory::Runtime => "Restart the application",
        }
    }
}

pub type Result<T> = std::result::Result<T, TripCostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_severity() {
        let io = TripCostError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.category(), ErrorCategory::Storage);
        assert_eq!(io.severity(), ErrorSeverity::High);

        let invalid = TripCostError::InvalidConfigValueError {
            field: "storage.dir".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert!(invalid.user_friendly_message().contains("storage.dir"));
    }

    #[test]
    fn test_corrupted_settings_is_retryable() {
        let err: TripCostError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("settings.json"));
    }
}
