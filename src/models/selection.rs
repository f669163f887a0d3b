use camino::Utf8PathBuf;

/// A file offered to or held by the control.
///
/// This is an opaque handle: the control reads the metadata carried here and
/// never opens the contents. Presentation code builds one from a picked or
/// dropped path; tests build them directly.
///
/// # Related Types
///
/// - [`SelectionState`]: Holds at most one `FileHandle`
/// - [`crate::services::validation::validate`]: Decides whether a candidate is acceptable
/// - [`crate::services::mime_detection::candidate_from_path`]: Builds a handle from disk metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    /// Display name, usually the file name component of the path
    pub name: String,

    /// Size in bytes as reported by the source
    pub size_bytes: u64,

    /// MIME type string, e.g. "image/png"
    pub mime_type: String,

    /// On-disk location when the handle came from the picker or a drop.
    /// Absent for handles constructed in memory.
    pub path: Option<Utf8PathBuf>,
}

impl FileHandle {
    /// Create a handle without an on-disk location.
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            path: None,
        }
    }
}

/// The selection slot: empty, or holding exactly one validated file.
///
/// Single-selection is fixed. A new valid candidate replaces the held file;
/// a rejected candidate empties the slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No file selected
    #[default]
    Empty,

    /// One validated file held
    Held(FileHandle),
}

impl SelectionState {
    /// The held file, if any.
    pub fn held(&self) -> Option<&FileHandle> {
        match self {
            SelectionState::Empty => None,
            SelectionState::Held(file) => Some(file),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handle_has_no_path() {
        let file = FileHandle::new("report.pdf", 1024, "application/pdf");
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size_bytes, 1024);
        assert_eq!(file.mime_type, "application/pdf");
        assert!(file.path.is_none());
    }

    #[test]
    fn test_default_selection_is_empty() {
        let state = SelectionState::default();
        assert!(state.is_empty());
        assert!(state.held().is_none());
    }

    #[test]
    fn test_held_selection() {
        let file = FileHandle::new("photo.png", 2048, "image/png");
        let state = SelectionState::Held(file.clone());

        assert!(!state.is_empty());
        assert_eq!(state.held(), Some(&file));
    }
}
