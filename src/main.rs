//! Dropzone - Single-file upload control with size and type validation
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! This binary crate provides the Slint GUI frontend for the dropzone control.
//! It initializes:
//! - Logging infrastructure (file rotation + console output)
//! - Configuration loading ([`ConfigManager`])
//! - Selection state machine ([`DropzoneController`])
//! - GUI controller ([`GuiController`] - bridges Slint UI with the selection logic)
//!
//! Everything runs on the main thread: the selection controller is synchronous
//! and is shared with the Slint callbacks through `Rc<RefCell<_>>`.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/dropzone.<date>.log
//! 2. Load YAML settings from Dropzone Data/ (missing file → defaults)
//! 3. Build and validate [`DropzoneOptions`]
//! 4. Create DropzoneController and register the change listener
//! 5. Create GuiController (wires Slint UI to the controller)
//! 6. Run Slint event loop (blocks until window closed)
//!
//! # Configuration Files
//!
//! Expected in `Dropzone Data/` directory:
//! - `Dropzone Settings.yaml`: Label, size limit, allowed types, required flag

use anyhow::Result;
use dropzone::ui::GuiController;
use dropzone::{ConfigManager, DropzoneController, APP_NAME, VERSION};
use std::cell::RefCell;
use std::rc::Rc;

/// Main entry point for the dropzone GUI application
///
/// # Returns
///
/// - `Ok(())` if the application ran and exited normally
/// - `Err(_)` if initialization or GUI execution failed
///
/// # Errors
///
/// This function can fail if:
/// - Logging initialization fails (disk space, permissions)
/// - The settings file exists but is invalid YAML
/// - The configured options are unusable (zero size limit)
/// - Slint UI initialization fails (graphics drivers, display)
/// - GUI encounters a fatal error during execution
fn main() -> Result<()> {
    // Setup logging with both file and console output.
    // The guard must stay alive for the life of the process or buffered
    // log lines are lost.
    let _guard = dropzone::logging::setup_logging("logs", "dropzone", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Load settings, falling back to built-in defaults when the file is absent
    let config_manager = ConfigManager::new("Dropzone Data")?;
    let settings = config_manager.load_settings()?;

    let options = settings.dropzone_settings.to_options();
    options.validate()?;

    tracing::info!(
        "Loaded options - label: {:?}, max size: {} bytes, allowed types: {}",
        options.label,
        options.max_size_bytes,
        options.allowed_mime_types.len()
    );

    // Create the selection controller and register the change listener
    let mut controller = DropzoneController::new(options);
    controller.set_on_change(|file| match file {
        Some(file) => {
            tracing::info!("Form value changed: {} ({} bytes)", file.name, file.size_bytes);
        }
        None => {
            tracing::info!("Form value changed: none");
        }
    });

    let dropzone = Rc::new(RefCell::new(controller));

    // Create GUI controller
    // This wires up the Slint UI with the selection state machine
    let gui_controller = GuiController::new(dropzone)?;

    tracing::info!("GUI controller initialized, launching window");

    // Run the GUI (blocks until window is closed)
    let result = gui_controller.run();

    tracing::info!("GUI closed, shutting down");

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
