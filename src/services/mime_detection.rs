//! MIME detection utilities for building candidates from filesystem paths.
//!
//! Browsers hand a form control a ready-made file object with its type
//! attached; on the desktop the picker and drag-and-drop produce bare paths.
//! This module fills the gap:
//! - [`detect_mime_type`]: extension to MIME string, `application/octet-stream` fallback
//! - [`extensions_for_mime`]: the reverse mapping, used for picker filters
//! - [`candidate_from_path`]: a [`FileHandle`] from disk metadata, contents untouched
//!
//! # Examples
//!
//! ```ignore
//! use dropzone::services::mime_detection::{candidate_from_path, detect_mime_type};
//! use camino::Utf8Path;
//!
//! assert_eq!(detect_mime_type(Utf8Path::new("photo.JPG")), "image/jpeg");
//!
//! let candidate = candidate_from_path(Utf8Path::new("report.pdf"))?;
//! assert_eq!(candidate.mime_type, "application/pdf");
//! ```

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use std::fs;

use crate::models::FileHandle;

/// Detect the MIME type of a path from its extension.
///
/// Matching is case-insensitive. Paths without an extension, or with an
/// unknown one, map to `application/octet-stream`.
pub fn detect_mime_type(path: &Utf8Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Extensions associated with a MIME type, for native picker filters.
///
/// Returns an empty list for types without a known extension; callers treat
/// that as "no filter", never as "reject".
pub fn extensions_for_mime(mime: &str) -> Vec<&'static str> {
    mime_guess::get_mime_extensions_str(mime)
        .map(|extensions| extensions.to_vec())
        .unwrap_or_default()
}

/// Build a candidate from a picked or dropped path.
///
/// Reads only metadata; the file contents are never opened. The detected
/// MIME type is advisory and still subject to validation.
///
/// # Errors
///
/// Fails when the metadata cannot be read or the path is not a regular file.
pub fn candidate_from_path(path: &Utf8Path) -> Result<FileHandle> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to read file metadata: {}", path))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path);
    }

    let name = path
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string());

    Ok(FileHandle {
        name,
        size_bytes: metadata.len(),
        mime_type: detect_mime_type(path),
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_detect_common_types() {
        assert_eq!(detect_mime_type(Utf8Path::new("a.png")), "image/png");
        assert_eq!(detect_mime_type(Utf8Path::new("a.jpg")), "image/jpeg");
        assert_eq!(detect_mime_type(Utf8Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(detect_mime_type(Utf8Path::new("a.pdf")), "application/pdf");
        assert_eq!(detect_mime_type(Utf8Path::new("a.mp4")), "video/mp4");
        assert_eq!(detect_mime_type(Utf8Path::new("a.mp3")), "audio/mpeg");
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_mime_type(Utf8Path::new("PHOTO.PNG")), "image/png");
        assert_eq!(detect_mime_type(Utf8Path::new("scan.Pdf")), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(
            detect_mime_type(Utf8Path::new("a.no-such-ext")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_missing_extension_falls_back() {
        assert_eq!(
            detect_mime_type(Utf8Path::new("README")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_extensions_for_mime() {
        assert!(extensions_for_mime("image/jpeg").contains(&"jpg"));
        assert!(extensions_for_mime("image/jpeg").contains(&"jpeg"));
        assert!(extensions_for_mime("application/pdf").contains(&"pdf"));
        assert!(extensions_for_mime("video/mp4").contains(&"mp4"));
    }

    #[test]
    fn test_extensions_for_unknown_mime_is_empty() {
        assert!(extensions_for_mime("application/x-no-such-type").is_empty());
        assert!(extensions_for_mime("not a mime").is_empty());
    }

    #[test]
    fn test_candidate_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sample.png");
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        let utf8_path = Utf8Path::from_path(&file_path).unwrap();
        let candidate = candidate_from_path(utf8_path).unwrap();

        assert_eq!(candidate.name, "sample.png");
        assert_eq!(candidate.size_bytes, 64);
        assert_eq!(candidate.mime_type, "image/png");
        assert_eq!(candidate.path.as_deref(), Some(utf8_path));
    }

    #[test]
    fn test_candidate_from_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("absent.pdf");
        let utf8_path = Utf8Path::from_path(&file_path).unwrap();

        assert!(candidate_from_path(utf8_path).is_err());
    }

    #[test]
    fn test_candidate_from_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let utf8_path = Utf8Path::from_path(temp_dir.path()).unwrap();

        assert!(candidate_from_path(utf8_path).is_err());
    }
}
