// Dropzone - Single-file upload control with size and type validation
//
// This is the library crate containing the selection logic and data structures.
// The binary crate (main.rs) provides the GUI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{DropzoneOptions, FileHandle, SelectionState, SettingsFile};
pub use services::{ValidationError, ValidationResult};
pub use state::{DropzoneController, SelectionChange};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
