pub mod calculator;
pub mod format;
pub mod preferences;

pub use crate::domain::model::{CostEstimate, SettingsDocument, Theme, TripInputs};
pub use crate::domain::ports::SettingsStorage;
pub use crate::utils::error::Result;
