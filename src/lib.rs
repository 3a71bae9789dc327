pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::{FileSettingsStorage, MemorySettingsStorage};
pub use self::core::calculator::{compute, FuelCostCalculator};
pub use self::core::preferences::{PreferenceSubscription, ThemePreferenceStore};
pub use domain::model::{CostEstimate, Theme, TripInputs};
pub use utils::error::{Result, TripCostError};
