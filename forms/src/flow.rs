//! Submission lifecycle shared by both form controllers.
//!
//! ```text
//! Editing --submit--> Submitting --ok--> Redirecting
//!    ^                    |
//!    +-------error--------+
//! ```
//!
//! Submitting cannot be cancelled, and a submit attempted outside Editing is
//! refused with [`SubmitError::InFlight`] before any request is built.

use crate::error::SubmitError;
use crate::notify::{Notice, Notifier};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Redirecting,
}

impl Phase {
    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Editing
    }
}

/// Refuse re-entry unless the form is idle.
pub(crate) fn ensure_idle(phase: Phase) -> Result<(), SubmitError> {
    if phase == Phase::Editing {
        Ok(())
    } else {
        tracing::debug!(?phase, "submit ignored while not editing");
        Err(SubmitError::InFlight)
    }
}

/// Report a failure as exactly one notice: `"<prefix>: <detail>"`.
pub(crate) fn report_failure(notifier: &dyn Notifier, prefix: &str, error: &SubmitError) {
    tracing::warn!(error = %error, "{prefix}");
    notifier.notify(Notice::failure(format!("{prefix}: {}", error.detail())));
}
