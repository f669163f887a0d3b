//! Services module - Pure decision logic for the dropzone control.
//!
//! This module contains the business rules behind the control. The services are
//! **framework-agnostic** and have no dependencies on the UI layer, making them
//! testable and reusable.
//!
//! # Components
//!
//! - [`validation`]: The candidate decision function. Given a candidate file (or its
//!   absence) and the control's options, decides between:
//!   - Valid: the candidate may be held
//!   - [`ValidationError::MissingRequired`]: nothing selected on a required control
//!   - [`ValidationError::TooLarge`]: size strictly above the configured ceiling
//!   - [`ValidationError::UnsupportedType`]: MIME type outside the allow-set
//!
//! - [`mime_detection`]: Desktop stand-in for the browser's ready-typed file object.
//!   Maps extensions to MIME strings, derives picker filter extensions, and builds
//!   [`FileHandle`](crate::models::FileHandle) values from filesystem metadata.
//!
//! # Design Philosophy
//!
//! The services layer is designed to be:
//! - **Pure where it can be**: validation does no I/O at all; mime detection reads
//!   metadata only and never opens file contents
//! - **Synchronous**: every call runs to completion on the caller's thread
//! - **Testable**: no hidden dependencies, all inputs are explicit parameters
//! - **Framework-agnostic**: no Slint, no GUI code, only business logic
//!
//! # Usage Example
//!
//! ```ignore
//! use dropzone::models::DropzoneOptions;
//! use dropzone::services::{candidate_from_path, validate};
//! use camino::Utf8Path;
//!
//! let options = DropzoneOptions::default();
//! let candidate = candidate_from_path(Utf8Path::new("photo.png"))?;
//!
//! let result = validate(Some(&candidate), &options);
//! assert!(result.is_valid());
//! ```

pub mod mime_detection;
pub mod validation;

pub use mime_detection::{candidate_from_path, detect_mime_type, extensions_for_mime};
pub use validation::{ValidationError, ValidationResult, validate};
