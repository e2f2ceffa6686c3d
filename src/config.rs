//! Resolved CLI configuration.
//!
//! Raw values come from `clap` (flags with environment fallbacks); this
//! module normalizes and checks them once so the rest of the CLI can trust
//! them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOKEN_FILE: &str = ".loandesk/token.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API origin without a trailing slash.
    pub base_url: String,
    pub token_file: PathBuf,
    /// Whole-request timeout; zero disables it.
    pub timeout: Duration,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an
    /// `http://` or `https://` URL with a host.
    pub fn new(base_url: &str, token_file: impl Into<PathBuf>, timeout_secs: u64) -> Result<Self, CliError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            token_file: token_file.into(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(CliError::InvalidBaseUrl(raw.to_owned())),
    }
}
