// GUI Controller - Bridges Slint UI with the selection state machine
//
// This module contains the GuiController which coordinates between:
// - Slint UI (MainWindow)
// - DropzoneController (selection state and validation)
// - Candidate construction (paths from the picker or a drop)
//
// It handles:
// - Wiring UI callbacks to controller transitions
// - Applying change events to window properties
// - File picker dialogs

use crate::models::DropzoneOptions;
use crate::services::mime_detection::{candidate_from_path, extensions_for_mime};
use crate::state::{DropzoneController, SelectionChange};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::cell::RefCell;
use std::rc::Rc;

// Include the generated Slint code
slint::include_modules!();

/// GUI Controller that wires up the Slint UI with the dropzone control
///
/// This is the main coordinator for the GUI layer. It:
/// - Creates the window and seeds it from the controller's options and state
/// - Sets up Slint callbacks that drive controller transitions
/// - Maps returned [`SelectionChange`] events onto window properties
/// - Handles the native file picker using the `rfd` crate
///
/// The selection controller is shared with the UI callbacks through
/// `Rc<RefCell<_>>`; everything runs on the Slint event-loop thread.
///
/// # Example
/// ```ignore
/// let controller = DropzoneController::new(options);
/// let dropzone = Rc::new(RefCell::new(controller));
///
/// let gui = GuiController::new(dropzone)?;
/// gui.run()?;  // Blocks until window is closed
/// ```
pub struct GuiController {
    /// The Slint UI window
    ui: MainWindow,

    /// Selection state machine shared with the UI callbacks
    _dropzone: Rc<RefCell<DropzoneController>>,
}

impl GuiController {
    /// Create a new GUI controller
    ///
    /// # Arguments
    /// * `dropzone` - Selection controller, shared with the UI callbacks
    ///
    /// # Returns
    /// A new GuiController ready to run
    pub fn new(dropzone: Rc<RefCell<DropzoneController>>) -> Result<Self> {
        // Create the Slint UI
        let ui = MainWindow::new().context("Failed to create Slint UI")?;

        // Initialize UI with current state
        Self::sync_ui_with_state(&ui, &dropzone.borrow());

        // Set up Slint callbacks
        Self::setup_callbacks(&ui, &dropzone);

        tracing::info!("GUI controller initialized");

        Ok(Self {
            ui,
            _dropzone: dropzone,
        })
    }

    /// Run the GUI (blocks until window is closed)
    ///
    /// This starts the Slint event loop and blocks until the user closes the window.
    pub fn run(self) -> Result<(), slint::PlatformError> {
        tracing::info!("Starting GUI event loop");
        self.ui.run()
    }

    /// Synchronize UI with current state
    ///
    /// This is called once at startup to initialize the UI with the control's
    /// options and the initial (empty, error-free) selection.
    fn sync_ui_with_state(ui: &MainWindow, dropzone: &DropzoneController) {
        let options = dropzone.options();

        // Static configuration
        ui.set_label_text(options.label.clone().into());
        ui.set_is_required(options.required);
        ui.set_picker_hint(options.picker_hint().into());

        // Selection state
        ui.set_file_name(
            dropzone
                .held_file()
                .map(|file| file.name.clone())
                .unwrap_or_default()
                .into(),
        );
        ui.set_has_file(dropzone.held_file().is_some());
        ui.set_error_text(dropzone.displayed_error().unwrap_or_default().into());

        tracing::debug!("UI synchronized with initial state");
    }

    /// Set up Slint UI callbacks
    ///
    /// This connects Slint UI events (clicks, drops) to controller transitions.
    fn setup_callbacks(ui: &MainWindow, dropzone: &Rc<RefCell<DropzoneController>>) {
        let dropzone_clone = Rc::clone(dropzone);
        let ui_weak = ui.as_weak();

        // Choose file: open the native picker, present the pick as a candidate
        ui.on_choose_file(move || {
            tracing::debug!("Choose file clicked");

            // Borrow ends before the modal dialog blocks the event loop
            let extensions = Self::picker_extensions(dropzone_clone.borrow().options());

            if let Some(path) = Self::show_file_picker("Select File", &extensions) {
                tracing::info!("File selected: {}", path);
                Self::present_path(&dropzone_clone, &ui_weak, &path);
            }
        });

        let dropzone_clone = Rc::clone(dropzone);
        let ui_weak = ui.as_weak();

        // Remove the held file
        ui.on_remove_file(move || {
            tracing::debug!("Remove file clicked");

            let changes = dropzone_clone.borrow_mut().request_clear();
            Self::apply_changes(&ui_weak, &changes);
        });

        let dropzone_clone = Rc::clone(dropzone);
        let ui_weak = ui.as_weak();

        // The platform drag-and-drop integration hands over a dropped path
        ui.on_file_dropped(move |path| {
            tracing::debug!("File dropped: {}", path);

            let path = Utf8PathBuf::from(path.as_str());
            Self::present_path(&dropzone_clone, &ui_weak, &path);
        });

        tracing::debug!("UI callbacks configured");
    }

    /// Build a candidate from a path and run it through the controller
    ///
    /// A path that cannot be inspected is logged and ignored; the selection
    /// stays as it was.
    fn present_path(
        dropzone: &Rc<RefCell<DropzoneController>>,
        ui_weak: &slint::Weak<MainWindow>,
        path: &Utf8Path,
    ) {
        match candidate_from_path(path) {
            Ok(candidate) => {
                let changes = dropzone.borrow_mut().present_candidates(vec![candidate]);
                Self::apply_changes(ui_weak, &changes);
            }
            Err(e) => {
                tracing::error!("Could not inspect {}: {}", path, e);
            }
        }
    }

    /// Apply controller change events to window properties
    fn apply_changes(ui_weak: &slint::Weak<MainWindow>, changes: &[SelectionChange]) {
        if let Some(ui) = ui_weak.upgrade() {
            for change in changes {
                match change {
                    SelectionChange::HeldFileChanged { file } => {
                        ui.set_file_name(
                            file.as_ref()
                                .map(|f| f.name.clone())
                                .unwrap_or_default()
                                .into(),
                        );
                        ui.set_has_file(file.is_some());
                    }
                    SelectionChange::ErrorChanged { error } => {
                        ui.set_error_text(error.clone().unwrap_or_default().into());
                    }
                }
            }
        }
    }

    /// Derive picker filter extensions from the allowed MIME types
    ///
    /// The filter is a convenience only; the validator remains the
    /// authoritative check. Types without a known extension contribute
    /// nothing, and an empty result means the picker shows all files.
    fn picker_extensions(options: &DropzoneOptions) -> Vec<&'static str> {
        let mut extensions = Vec::new();

        for mime in &options.allowed_mime_types {
            for extension in extensions_for_mime(mime) {
                if !extensions.contains(&extension) {
                    extensions.push(extension);
                }
            }
        }

        extensions
    }

    /// Show a native file picker dialog
    ///
    /// Uses the `rfd` crate to display a native file dialog restricted to a
    /// single file.
    ///
    /// # Arguments
    /// * `title` - Dialog title
    /// * `extensions` - Extensions for the filter; empty shows all files
    ///
    /// # Returns
    /// The selected file path, or None if cancelled
    fn show_file_picker(title: &str, extensions: &[&str]) -> Option<Utf8PathBuf> {
        use rfd::FileDialog;

        let mut dialog = FileDialog::new().set_title(title);

        if !extensions.is_empty() {
            dialog = dialog.add_filter("Allowed files", extensions);
        }

        // Show dialog and convert result
        dialog.pick_file().and_then(|path| {
            Utf8PathBuf::try_from(path)
                .map_err(|e| {
                    tracing::error!("Failed to convert path to UTF-8: {}", e);
                    e
                })
                .ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_extensions_from_defaults() {
        // png, jpeg, pdf in declaration order; jpeg maps to two extensions
        let options = DropzoneOptions::default();
        assert_eq!(
            GuiController::picker_extensions(&options),
            vec!["png", "jpg", "jpeg", "pdf"]
        );
    }

    #[test]
    fn test_picker_extensions_skip_unknown_types() {
        let mut options = DropzoneOptions::default();
        options.allowed_mime_types = ["video/x-custom", "image/png"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(GuiController::picker_extensions(&options), vec!["png"]);
    }

    #[test]
    fn test_shared_controller_usable_without_window() {
        // Note: This test is limited because Slint UI requires a display/window system
        // More comprehensive tests of the selection logic are in integration tests

        let dropzone = Rc::new(RefCell::new(DropzoneController::new(
            DropzoneOptions::default(),
        )));

        assert!(dropzone.borrow().held_file().is_none());
        assert!(dropzone.borrow().displayed_error().is_none());
    }
}
