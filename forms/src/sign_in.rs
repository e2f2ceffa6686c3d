//! Sign-in form controller.
//!
//! Holds the controlled email/password inputs and drives one login round
//! trip: validate, post, persist the token, notify, redirect home.
//!
//! The submit is split into [`SignInForm::begin_submit`] and
//! [`SignInForm::complete`] so a UI can keep the form in reactive state and
//! await the request in between; [`submit_sign_in`] runs both halves for
//! callers that can simply await.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::api::LoanApi;
use crate::credentials::Credentials;
use crate::error::SubmitError;
use crate::fields::Field;
use crate::flow::{Phase, ensure_idle, report_failure};
use crate::notify::{HOME_PATH, Navigator, Notice, Notifier};
use crate::session::{AccessToken, Session, TokenStore};
use crate::wire::LoginGrant;

pub const LOGIN_SUCCESS_TEXT: &str = "Login successful";
pub const LOGIN_FAILURE_PREFIX: &str = "Error logging in";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    draft: Credentials,
    phase: Phase,
}

impl SignInForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.draft.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.draft.password
    }

    /// Current value of `field`; empty for fields not on this form.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.draft.email,
            Field::Password => &self.draft.password,
            _ => "",
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Replace a field's value verbatim. Returns `false` for fields that are
    /// not on this form.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        match field {
            Field::Email => self.draft.email = value.into(),
            Field::Password => self.draft.password = value.into(),
            _ => return false,
        }
        true
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] if a submission is already running (no
    /// notice), or [`SubmitError::Invalid`] after posting a failure notice.
    pub fn begin_submit(&mut self, notifier: &dyn Notifier) -> Result<Credentials, SubmitError> {
        ensure_idle(self.phase)?;
        let credentials = self
            .draft
            .validate()
            .map_err(SubmitError::from)
            .inspect_err(|e| report_failure(notifier, LOGIN_FAILURE_PREFIX, e))?;
        self.phase = Phase::Submitting;
        tracing::debug!("dispatching sign-in request");
        Ok(credentials)
    }

    /// Apply the login response. On success the token is stored, the draft
    /// is cleared and the user is sent home; on failure storage is left
    /// untouched and the form returns to `Editing`.
    ///
    /// # Errors
    ///
    /// Returns the request failure, or a storage failure while persisting
    /// the token, after posting a failure notice.
    pub fn complete<S: TokenStore>(
        &mut self,
        result: Result<LoginGrant, SubmitError>,
        session: &Session<S>,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> Result<AccessToken, SubmitError> {
        let outcome = result.and_then(|grant| session.sign_in(&grant).map_err(SubmitError::from));
        match outcome {
            Ok(token) => {
                self.draft = Credentials::default();
                self.phase = Phase::Redirecting;
                tracing::info!("signed in");
                notifier.notify(Notice::success(LOGIN_SUCCESS_TEXT));
                navigator.navigate(HOME_PATH);
                Ok(token)
            }
            Err(err) => {
                self.phase = Phase::Editing;
                report_failure(notifier, LOGIN_FAILURE_PREFIX, &err);
                Err(err)
            }
        }
    }
}

/// Run a complete sign-in round trip.
///
/// # Errors
///
/// See [`SignInForm::begin_submit`] and [`SignInForm::complete`].
pub async fn submit_sign_in<A, S>(
    form: &mut SignInForm,
    api: &A,
    session: &Session<S>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<AccessToken, SubmitError>
where
    A: LoanApi + ?Sized,
    S: TokenStore,
{
    let credentials = form.begin_submit(notifier)?;
    let result = api.login(&credentials).await;
    form.complete(result, session, notifier, navigator)
}
