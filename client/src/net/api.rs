//! REST API transport for the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error, since `fetch` only
//! exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a `Result<_, SubmitError>`; network failures become
//! `Transport` and status/body interpretation is delegated to
//! `forms::wire`, so nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
#[cfg(feature = "csr")]
use forms::wire::{self, TOKEN_HEADER};
use forms::wire::{APPLY_LOAN_PATH, LOGIN_PATH};
use forms::{AccessToken, Credentials, LoanApi, LoanApplication, LoginGrant, SubmitError};

/// API origin used when `LOANDESK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Compile-time API origin without a trailing slash.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("LOANDESK_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `LoanApi` over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    base_url: String,
}

impl Default for BrowserApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "csr")]
fn transport(error: gloo_net::Error) -> SubmitError {
    SubmitError::Transport(error.to_string())
}

/// POST a JSON body and collect `(status, text)`.
#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(
    url: &str,
    body: &T,
    token: Option<&AccessToken>,
) -> Result<(u16, String), SubmitError> {
    let mut request = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        request = request.header(TOKEN_HEADER, token.as_str());
    }
    let response = request.json(body).map_err(transport)?.send().await.map_err(transport)?;
    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    log::debug!("{url} -> {status}");
    Ok((status, text))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> SubmitError {
    SubmitError::Transport("not available outside the browser".to_owned())
}

#[async_trait(?Send)]
impl LoanApi for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, SubmitError> {
        let url = self.url(LOGIN_PATH);
        #[cfg(feature = "csr")]
        {
            let (status, body) = post_json(&url, credentials, None).await?;
            wire::decode_login(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, credentials);
            Err(unavailable())
        }
    }

    async fn apply_loan(&self, token: &AccessToken, application: &LoanApplication) -> Result<String, SubmitError> {
        let url = self.url(APPLY_LOAN_PATH);
        #[cfg(feature = "csr")]
        {
            let (status, body) = post_json(&url, application, Some(token)).await?;
            wire::decode_message(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token, application);
            Err(unavailable())
        }
    }
}
