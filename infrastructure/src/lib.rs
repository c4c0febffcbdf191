//! Infrastructure layer for eduquiz
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Gemini REST gateway, the figment-backed settings
//! store, entropy/seeded random sources, and telemetry initialization.

pub mod config;
pub mod providers;
pub mod random;
pub mod telemetry;

// Re-export commonly used types
pub use config::{FigmentSettingsStore, FileSettings, SettingsLoader};
pub use providers::gemini::GeminiGateway;
pub use random::{EntropyRandom, SeededRandom};
