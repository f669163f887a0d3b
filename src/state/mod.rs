// Selection state management
//
// This module provides the DropzoneController which owns the single-slot
// selection, runs every candidate through the validator, derives the
// displayed error, and emits change events for GUI updates plus a host
// callback carrying the current form value.

use crate::models::{DropzoneOptions, FileHandle, SelectionState};
use crate::services::validation::{self, ValidationResult};

/// Host callback receiving the held file after every transition.
pub type ChangeCallback = Box<dyn FnMut(Option<&FileHandle>)>;

/// Change events emitted when a transition alters what the control displays
///
/// These events are returned from every transition so the GUI layer can map
/// them onto window properties without re-reading the whole state.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionChange {
    /// The held file slot changed
    HeldFileChanged { file: Option<FileHandle> },

    /// The displayed error line changed
    ErrorChanged { error: Option<String> },
}

/// The selection state machine behind one dropzone instance
///
/// This is the central component of the control. It:
/// - Owns the [`SelectionState`] slot and the configured [`DropzoneOptions`]
/// - Validates every candidate change through [`validation::validate`]
/// - Detects observable changes and returns [`SelectionChange`] events
/// - Notifies the host form via a callback after every transition
///
/// # Transition Rules
///
/// - A valid candidate is held, replacing any prior file
/// - A rejected candidate empties the slot, even when a file was held before
/// - A clear request empties the slot; on a required control it shows the
///   missing-field message, otherwise nothing
/// - The initial state is empty with no error, regardless of `required`;
///   validation starts with the first interaction
///
/// # Concurrency
///
/// Single-owner and fully synchronous. Every operation runs to completion on
/// the calling thread; in the GUI binary the controller lives in an
/// `Rc<RefCell<_>>` on the event-loop thread.
///
/// # Usage
///
/// ```ignore
/// let mut controller = DropzoneController::new(DropzoneOptions::default());
/// controller.set_on_change(|file| println!("form value: {:?}", file.map(|f| &f.name)));
///
/// let changes = controller.present_candidates(vec![candidate]);
/// let held = controller.held_file();
/// let error = controller.displayed_error();
/// ```
///
/// # Related Types
///
/// - [`crate::models::SelectionState`]: The underlying slot
/// - [`SelectionChange`]: Event types returned from transitions
/// - [`crate::services::validation::validate`]: The decision function
/// - [`crate::ui::GuiController`]: Primary consumer of change events
pub struct DropzoneController {
    /// Configuration fixed for the lifetime of this instance
    options: DropzoneOptions,

    /// The selection slot
    selection: SelectionState,

    /// Last validator outcome. `None` until the user first interacts, so a
    /// required control starts without an error line.
    last_result: Option<ValidationResult>,

    /// Host callback, invoked exactly once per transition
    on_change: ChangeCallback,
}

impl DropzoneController {
    /// Create a controller with the given options, an empty slot, and a
    /// no-op host callback.
    pub fn new(options: DropzoneOptions) -> Self {
        Self {
            options,
            selection: SelectionState::Empty,
            last_result: None,
            on_change: Box::new(|_| {}),
        }
    }

    /// Replace the host callback.
    ///
    /// The callback runs synchronously inside each transition, after state
    /// has settled. It receives the held file, including an unchanged value
    /// when a transition ends where it started, so hosts must treat delivery
    /// as idempotent. It must not call back into this controller.
    pub fn set_on_change(&mut self, callback: impl FnMut(Option<&FileHandle>) + 'static) {
        self.on_change = Box::new(callback);
    }

    /// The options this instance was built with.
    pub fn options(&self) -> &DropzoneOptions {
        &self.options
    }

    /// The currently held file, if any.
    pub fn held_file(&self) -> Option<&FileHandle> {
        self.selection.held()
    }

    /// Error text currently shown, derived from the last validator outcome.
    ///
    /// `None` both before the first interaction and after a valid one.
    pub fn displayed_error(&self) -> Option<String> {
        self.last_result.as_ref().and_then(|result| result.message())
    }

    /// Present the files from a picker selection or a drop.
    ///
    /// Only the first candidate is considered; the control is single-file
    /// and the remainder is discarded. An empty sequence is handled as an
    /// absent candidate, which on a required control raises the
    /// missing-field error.
    pub fn present_candidates(&mut self, candidates: Vec<FileHandle>) -> Vec<SelectionChange> {
        let extra = candidates.len().saturating_sub(1);
        if extra > 0 {
            tracing::debug!("Discarding {} extra candidate(s) beyond the first", extra);
        }

        let candidate = candidates.into_iter().next();
        self.apply_candidate(candidate)
    }

    /// Clear the slot, e.g. from the remove affordance.
    ///
    /// Equivalent to presenting no candidate: the slot empties, and a
    /// required control shows the missing-field message.
    pub fn request_clear(&mut self) -> Vec<SelectionChange> {
        self.apply_candidate(None)
    }

    /// Run one transition: validate the candidate, update the slot and the
    /// stored result, detect changes, and notify the host exactly once.
    fn apply_candidate(&mut self, candidate: Option<FileHandle>) -> Vec<SelectionChange> {
        let old_file = self.held_file().cloned();
        let old_error = self.displayed_error();

        let result = validation::validate(candidate.as_ref(), &self.options);

        self.selection = match (&result, candidate) {
            (ValidationResult::Valid, Some(file)) => SelectionState::Held(file),
            _ => SelectionState::Empty,
        };
        self.last_result = Some(result);

        let changes = self.detect_changes(old_file.as_ref(), old_error.as_deref());

        tracing::debug!(
            "Selection transition: held={:?}, error={:?}",
            self.selection.held().map(|file| file.name.as_str()),
            self.displayed_error()
        );

        // Notify the host with the settled value. Field access keeps the
        // selection borrow disjoint from the callback borrow.
        let held = self.selection.held();
        (self.on_change)(held);

        changes
    }

    /// Detect what changed between two observable states and generate events
    ///
    /// This is called internally by `apply_candidate()` before the host
    /// callback runs.
    fn detect_changes(
        &self,
        old_file: Option<&FileHandle>,
        old_error: Option<&str>,
    ) -> Vec<SelectionChange> {
        let mut changes = Vec::new();

        let new_file = self.held_file();
        if old_file != new_file {
            changes.push(SelectionChange::HeldFileChanged {
                file: new_file.cloned(),
            });
        }

        let new_error = self.displayed_error();
        if old_error != new_error.as_deref() {
            changes.push(SelectionChange::ErrorChanged { error: new_error });
        }

        changes
    }
}
