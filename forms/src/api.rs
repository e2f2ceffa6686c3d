//! Backend API port.
//!
//! Implemented over `gloo-net` by the browser client and over `reqwest` by
//! the CLI; tests substitute in-memory fakes. The trait is `?Send` because
//! browser fetch futures are not `Send`.

use async_trait::async_trait;

use crate::application::LoanApplication;
use crate::credentials::Credentials;
use crate::error::SubmitError;
use crate::session::AccessToken;
use crate::wire::LoginGrant;

#[async_trait(?Send)]
pub trait LoanApi {
    /// `POST /login` with the credential pair as JSON.
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, SubmitError>;

    /// `POST /apply-loan` with `token` in the authorization header.
    /// Returns the server's confirmation message.
    async fn apply_loan(&self, token: &AccessToken, application: &LoanApplication) -> Result<String, SubmitError>;
}
