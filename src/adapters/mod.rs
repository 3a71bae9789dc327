// Adapters layer: concrete implementations for external systems (settings storage).

pub mod storage;

pub use storage::{FileSettingsStorage, MemorySettingsStorage};
