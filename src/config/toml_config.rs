use crate::adapters::storage::FileSettingsStorage;
use crate::domain::model::DEFAULT_STORE_NAME;
use crate::utils::error::{Result, TripCostError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SETTINGS_DIR: &str = "./.trip-cost";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub dir: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TripCostError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TripCostError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRIP_COST_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TripCostError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn settings_dir(&self) -> &str {
        self.storage.dir.as_deref().unwrap_or(DEFAULT_SETTINGS_DIR)
    }

    pub fn store_name(&self) -> &str {
        self.storage.name.as_deref().unwrap_or(DEFAULT_STORE_NAME)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn settings_storage(&self) -> FileSettingsStorage {
        FileSettingsStorage::new(self.settings_dir(), self.store_name())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage.dir", self.settings_dir())?;
        validation::validate_store_name("storage.name", self.store_name())?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(TripCostError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.settings_dir(), DEFAULT_SETTINGS_DIR);
        assert_eq!(config.store_name(), "settings");
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
dir = "/var/lib/trip-cost"
name = "prefs"

[logging]
level = "debug"
json = true
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.settings_dir(), "/var/lib/trip-cost");
        assert_eq!(config.store_name(), "prefs");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRIP_COST_TEST_DIR", "/tmp/trip-cost-test");

        let toml_content = r#"
[storage]
dir = "${TRIP_COST_TEST_DIR}"
name = "${TRIP_COST_UNSET_NAME_VAR}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.settings_dir(), "/tmp/trip-cost-test");
        assert_eq!(config.store_name(), "${TRIP_COST_UNSET_NAME_VAR}");

        std::env::remove_var("TRIP_COST_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[storage]\nname = \"../escape\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_display_section_is_rejected() {
        // 幣別與小數位數固定，不接受設定
        let result = AppConfig::from_toml_str("[display]\ncurrency = \"USD\"\ndecimals = 3\n");
        assert!(matches!(result, Err(TripCostError::ConfigError { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[storage\ndir = 1"),
            Err(TripCostError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\nname = \"prefs\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store_name(), "prefs");
    }
}
