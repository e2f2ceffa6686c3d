//! Apply a finished request to a page's form signal.
//!
//! The request outlives the page: if the route is left while the POST is in
//! flight the form signal is disposed, but the outcome (stored token,
//! notice, redirect) must still happen. When the signal is gone the result
//! is applied to a fresh controller instead.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use forms::{AccessToken, LoanForm, LoginGrant, Navigator, Notifier, Session, SignInForm, SubmitError, TokenStore};
use leptos::prelude::*;

/// Finish a sign-in round trip.
///
/// # Errors
///
/// Returns the request or storage failure, already reported through
/// `notifier`.
pub fn finish_sign_in<S: TokenStore>(
    form: RwSignal<SignInForm>,
    result: Result<LoginGrant, SubmitError>,
    session: &Session<S>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<AccessToken, SubmitError> {
    form.try_update(|f| f.complete(result.clone(), session, notifier, navigator))
        .unwrap_or_else(|| {
            #[cfg(feature = "csr")]
            log::debug!("sign-in page closed before response");
            SignInForm::new().complete(result, session, notifier, navigator)
        })
}

/// Finish a loan-application round trip.
///
/// # Errors
///
/// Returns the request failure, already reported through `notifier`.
pub fn finish_loan_application(
    form: RwSignal<LoanForm>,
    result: Result<String, SubmitError>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<String, SubmitError> {
    form.try_update(|f| f.complete(result.clone(), notifier, navigator))
        .unwrap_or_else(|| {
            #[cfg(feature = "csr")]
            log::debug!("loan page closed before response");
            LoanForm::new().complete(result, notifier, navigator)
        })
}
