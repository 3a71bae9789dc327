// Application layer: ephemeral presentation state and the command runners
// behind the CLI. Nothing here is persisted except through the theme store.

pub mod commands;
pub mod navigation;
pub mod runner;
pub mod session;

pub use commands::SessionCommand;
pub use navigation::{Navigator, Route};
pub use session::{EstimatorField, EstimatorForm, Outcome, Session};
