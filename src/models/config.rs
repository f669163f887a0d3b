use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::options::{
    DEFAULT_ALLOWED_MIME_TYPES, DEFAULT_LABEL, DEFAULT_MAX_SIZE_BYTES, DropzoneOptions,
};

/// Settings file structure for `Dropzone Settings.yaml`
///
/// Contains the control configuration: label, size ceiling, allowed types,
/// and the required flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(rename = "Dropzone_Settings")]
    pub dropzone_settings: DropzoneSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropzoneSettings {
    #[serde(rename = "Label", default = "default_label")]
    pub label: String,

    #[serde(rename = "Max Size Bytes", default = "default_max_size_bytes")]
    pub max_size_bytes: u64,

    #[serde(rename = "Allowed Types", default = "default_allowed_types")]
    pub allowed_types: Vec<String>,

    #[serde(rename = "Required", default)]
    pub required: bool,
}

impl Default for DropzoneSettings {
    fn default() -> Self {
        Self {
            label: default_label(),
            max_size_bytes: default_max_size_bytes(),
            allowed_types: default_allowed_types(),
            required: false,
        }
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            dropzone_settings: DropzoneSettings::default(),
        }
    }
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

fn default_allowed_types() -> Vec<String> {
    DEFAULT_ALLOWED_MIME_TYPES
        .iter()
        .map(|mime| mime.to_string())
        .collect()
}

impl DropzoneSettings {
    /// Convert the serde form into runtime options.
    ///
    /// Duplicate type entries collapse to their first occurrence, keeping
    /// the configured order.
    pub fn to_options(&self) -> DropzoneOptions {
        let allowed_mime_types: IndexSet<String> = self.allowed_types.iter().cloned().collect();

        DropzoneOptions {
            label: self.label.clone(),
            max_size_bytes: self.max_size_bytes,
            allowed_mime_types,
            required: self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = DropzoneSettings::default();
        assert_eq!(settings.label, "Upload File");
        assert_eq!(settings.max_size_bytes, 5_242_880);
        assert_eq!(settings.allowed_types.len(), 3);
        assert!(!settings.required);
    }

    #[test]
    fn test_default_settings_match_default_options() {
        let from_settings = DropzoneSettings::default().to_options();
        assert_eq!(from_settings, DropzoneOptions::default());
    }

    #[test]
    fn test_to_options_deduplicates_preserving_order() {
        let settings = DropzoneSettings {
            allowed_types: vec![
                "application/pdf".to_string(),
                "image/png".to_string(),
                "application/pdf".to_string(),
            ],
            ..DropzoneSettings::default()
        };

        let options = settings.to_options();
        let listed: Vec<&String> = options.allowed_mime_types.iter().collect();
        assert_eq!(listed, ["application/pdf", "image/png"]);
    }
}
