//! Collaborator interfaces for playback runs
//!
//! The engine drives presentation through these traits. Frontends implement
//! them (the CLI renders terminal dialogs; tests record call traces).

use feint_types::DialogResponse;

use crate::scenario::ScenarioRecord;

use super::error::PresenterError;

/// Renders one scenario record as a modal dialog.
///
/// `show` blocks until the user responds. The response must come from the
/// record's button set; the engine records it but never branches on it.
pub trait Presenter {
    fn show(&self, record: &ScenarioRecord) -> Result<DialogResponse, PresenterError>;
}

/// Visibility of the authoring surface during a run.
///
/// Called only from the engine's entry and exit actions.
pub trait StageVisibility {
    fn hide(&self);
    fn show(&self);
}
