use crate::config::toml_config::AppConfig;
use crate::domain::model::Theme;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "trip-cost")]
#[command(about = "Estimate the fuel cost of a trip and manage the theme preference")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the settings store (overrides storage.dir)
    #[arg(long)]
    pub settings_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Estimate the fuel cost of a trip
    Estimate {
        /// Trip distance in km
        #[arg(long, allow_hyphen_values = true)]
        distance: String,

        /// Fuel efficiency in km/L
        #[arg(long, allow_hyphen_values = true)]
        efficiency: String,

        /// Fuel price per litre
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Explain how to use the calculator
    Info,

    /// Line-driven session with the home and calculator screens
    Interactive,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ThemeAction {
    /// Print the stored theme
    Show,

    /// Store a new theme
    Set { theme: Theme },

    /// Print the theme now and whenever it changes
    Watch {
        /// How often to re-read the settings store
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },
}

impl CliConfig {
    /// 讀取設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.settings_dir {
            config.storage.dir = Some(dir.clone());
        }

        if self.json_logs {
            config.logging.json = Some(true);
        }

        Ok(config)
    }
}
