//! Loan-application form controller.
//!
//! The token is read from the [`Session`] inside `begin_submit`, i.e. at
//! submit time, and the draft is validated before that so an invalid form
//! never reaches the network.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

use crate::api::LoanApi;
use crate::application::{LoanApplication, LoanDraft};
use crate::error::SubmitError;
use crate::estimate::Estimate;
use crate::fields::Field;
use crate::flow::{Phase, ensure_idle, report_failure};
use crate::notify::{HOME_PATH, Navigator, Notice, Notifier};
use crate::session::{AccessToken, Session, TokenStore};

pub const LOAN_FAILURE_PREFIX: &str = "Error submitting loan application";
const LOAN_SUCCESS_FALLBACK: &str = "Loan application submitted";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    draft: LoanDraft,
    phase: Phase,
}

impl LoanForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &LoanDraft {
        &self.draft
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.draft.value(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.draft.set(field, value)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    #[must_use]
    pub fn estimate(&self) -> Option<Estimate> {
        self.draft.estimate()
    }

    /// Validate the draft, read the current token and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] while busy (no notice);
    /// [`SubmitError::Invalid`] or [`SubmitError::NotSignedIn`] after
    /// posting a failure notice.
    pub fn begin_submit<S: TokenStore>(
        &mut self,
        session: &Session<S>,
        notifier: &dyn Notifier,
    ) -> Result<(AccessToken, LoanApplication), SubmitError> {
        ensure_idle(self.phase)?;
        let prepared = self
            .draft
            .validate()
            .map_err(SubmitError::from)
            .and_then(|application| {
                let token = session.token().ok_or(SubmitError::NotSignedIn)?;
                Ok((token, application))
            })
            .inspect_err(|e| report_failure(notifier, LOAN_FAILURE_PREFIX, e))?;
        self.phase = Phase::Submitting;
        tracing::debug!(loan_type = prepared.1.loan_type.as_str(), "dispatching loan application");
        Ok(prepared)
    }

    /// Apply the `/apply-loan` response: surface the server message and go
    /// home, or surface the failure and return to `Editing`.
    ///
    /// # Errors
    ///
    /// Returns the request failure after posting a failure notice.
    pub fn complete(
        &mut self,
        result: Result<String, SubmitError>,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> Result<String, SubmitError> {
        match result {
            Ok(message) => {
                self.phase = Phase::Redirecting;
                tracing::info!("loan application accepted");
                let text = if message.trim().is_empty() { LOAN_SUCCESS_FALLBACK } else { message.as_str() };
                notifier.notify(Notice::success(text));
                navigator.navigate(HOME_PATH);
                Ok(message)
            }
            Err(err) => {
                self.phase = Phase::Editing;
                report_failure(notifier, LOAN_FAILURE_PREFIX, &err);
                Err(err)
            }
        }
    }
}

/// Run a complete loan submission round trip.
///
/// # Errors
///
/// See [`LoanForm::begin_submit`] and [`LoanForm::complete`].
pub async fn submit_loan_application<A, S>(
    form: &mut LoanForm,
    api: &A,
    session: &Session<S>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<String, SubmitError>
where
    A: LoanApi + ?Sized,
    S: TokenStore,
{
    let (token, application) = form.begin_submit(session, notifier)?;
    let result = api.apply_loan(&token, &application).await;
    form.complete(result, notifier, navigator)
}
