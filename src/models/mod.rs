//! Data models for the dropzone control.
//!
//! This module contains all the core data structures used throughout the application:
//! - [`FileHandle`]: Opaque handle for a candidate or held file (name, size, MIME type)
//! - [`SelectionState`]: The single-slot selection, empty or holding one file
//! - [`DropzoneOptions`]: Runtime configuration for one control instance
//! - [`SettingsFile`] / [`DropzoneSettings`]: The YAML schema loaded from `Dropzone Settings.yaml`
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Plain data**: No I/O and no framework types; the services and state layers operate on them
//! - **Serializable where persisted**: Only the settings structs derive `Serialize`/`Deserialize`
//! - **Single-owner**: Selection state is mutated exclusively through
//!   [`DropzoneController`](crate::state::DropzoneController)

pub mod config;
pub mod options;
pub mod selection;

pub use config::{DropzoneSettings, SettingsFile};
pub use options::{
    DEFAULT_ALLOWED_MIME_TYPES, DEFAULT_LABEL, DEFAULT_MAX_SIZE_BYTES, DropzoneOptions,
};
pub use selection::{FileHandle, SelectionState};
