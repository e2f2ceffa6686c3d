//! `reqwest` implementation of the backend API port.

use async_trait::async_trait;
use forms::wire::{self, APPLY_LOAN_PATH, LOGIN_PATH, TOKEN_HEADER};
use forms::{AccessToken, Credentials, LoanApi, LoanApplication, LoginGrant, SubmitError};

use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the TLS-backed client cannot be built.
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let mut builder = reqwest::Client::builder();
        if !config.timeout.is_zero() {
            builder = builder.timeout(config.timeout);
        }
        Ok(Self { client: builder.build()?, base_url: config.base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send and collect `(status, body)`; only transport failures are errors
    /// here, status interpretation is left to the wire decoders.
    async fn exchange(request: reqwest::RequestBuilder) -> Result<(u16, String), SubmitError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok((status, body))
    }
}

fn transport(error: reqwest::Error) -> SubmitError {
    if error.is_timeout() {
        SubmitError::Transport("request timed out".to_owned())
    } else {
        SubmitError::Transport(error.to_string())
    }
}

#[async_trait(?Send)]
impl LoanApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, SubmitError> {
        let request = self.client.post(self.url(LOGIN_PATH)).json(credentials);
        let (status, body) = Self::exchange(request).await?;
        wire::decode_login(status, &body)
    }

    async fn apply_loan(&self, token: &AccessToken, application: &LoanApplication) -> Result<String, SubmitError> {
        let request = self
            .client
            .post(self.url(APPLY_LOAN_PATH))
            .header(TOKEN_HEADER, token.as_str())
            .json(application);
        let (status, body) = Self::exchange(request).await?;
        wire::decode_message(status, &body)
    }
}
