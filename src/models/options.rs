use anyhow::{Result, bail};
use indexmap::IndexSet;

/// Default display label for the control.
pub const DEFAULT_LABEL: &str = "Upload File";

/// Default size ceiling: 5 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default accepted MIME types.
pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "application/pdf"];

/// Bytes in one binary megabyte.
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Whole-megabyte rendering of a byte count, rounded half-up.
///
/// Used everywhere a size limit is shown to the user, so the rejection
/// message and the picker hint always agree. A limit below half a megabyte
/// renders as "0".
pub fn rounded_megabytes(bytes: u64) -> u64 {
    bytes / BYTES_PER_MEGABYTE + u64::from(bytes % BYTES_PER_MEGABYTE >= BYTES_PER_MEGABYTE / 2)
}

/// Runtime configuration for one control instance.
///
/// Fixed for the lifetime of the instance; reconfiguring means building a new
/// controller. The allow-set keeps insertion order because it is rendered as
/// a joined list in the empty-state hint.
///
/// # Related Types
///
/// - [`crate::models::DropzoneSettings`]: The serde form loaded from YAML
/// - [`crate::state::DropzoneController`]: Consumes these options on construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropzoneOptions {
    /// Display text for the control
    pub label: String,

    /// Size ceiling in bytes; candidates strictly larger are rejected
    pub max_size_bytes: u64,

    /// Exact MIME strings accepted, in configuration order
    pub allowed_mime_types: IndexSet<String>,

    /// Whether an absent file is an error
    pub required: bool,
}

impl Default for DropzoneOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES
                .iter()
                .map(|mime| mime.to_string())
                .collect(),
            required: false,
        }
    }
}

impl DropzoneOptions {
    /// Check the options for values that cannot work.
    ///
    /// A zero size limit is an error. An empty allow-set or an entry that
    /// does not look like `type/subtype` is suspicious but allowed, so it
    /// only logs a warning.
    pub fn validate(&self) -> Result<()> {
        if self.max_size_bytes == 0 {
            bail!("Max Size Bytes must be positive");
        }

        if self.allowed_mime_types.is_empty() {
            tracing::warn!("Allowed type list is empty; every candidate will be rejected");
        }

        for mime in &self.allowed_mime_types {
            if !looks_like_mime(mime) {
                tracing::warn!("Allowed type {:?} does not look like type/subtype", mime);
            }
        }

        Ok(())
    }

    /// The size limit in whole megabytes, rounded half-up.
    pub fn rounded_max_megabytes(&self) -> u64 {
        rounded_megabytes(self.max_size_bytes)
    }

    /// The subtype segment of each allowed MIME type, in configuration order.
    ///
    /// "image/png" contributes "png". An entry without a slash contributes an
    /// empty segment, matching how the hint has always rendered such entries.
    pub fn allowed_subtypes(&self) -> Vec<&str> {
        self.allowed_mime_types
            .iter()
            .map(|mime| mime.split('/').nth(1).unwrap_or(""))
            .collect()
    }

    /// Hint line shown inside the empty drop target,
    /// e.g. "Max 5MB - Allowed: png, jpeg, pdf".
    pub fn picker_hint(&self) -> String {
        format!(
            "Max {}MB - Allowed: {}",
            self.rounded_max_megabytes(),
            self.allowed_subtypes().join(", ")
        )
    }
}

/// Shape check for a MIME string: one slash with text on both sides.
fn looks_like_mime(mime: &str) -> bool {
    match mime.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty() && !subtype.is_empty() && !subtype.contains('/')
        }
        None => false,
    }
}
