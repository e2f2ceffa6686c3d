//! REST endpoint paths and response-body decoding.
//!
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) only move
//! bytes; both hand the status code and body text to the decoders here so
//! success and failure are interpreted identically everywhere.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SubmitError;

pub const LOGIN_PATH: &str = "/login";
pub const APPLY_LOAN_PATH: &str = "/apply-loan";
/// Header carrying the bearer token on authorized requests.
pub const TOKEN_HEADER: &str = "token";

const BODY_EXCERPT_CHARS: usize = 200;

/// Token grant returned by a successful `/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub access_token: String,
}

impl std::fmt::Debug for LoginGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginGrant").field("access_token", &"<redacted>").finish()
    }
}

/// `{message: {access_token}}` is the documented shape; a bare
/// `{access_token, ...}` body is accepted as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum LoginBody {
    Wrapped { message: LoginGrant },
    Bare(LoginGrant),
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Text(String),
    Items(Vec<DetailItem>),
    Other(Value),
}

#[derive(Deserialize)]
struct DetailItem {
    msg: String,
    #[serde(default)]
    loc: Vec<Value>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a `/login` response.
///
/// # Errors
///
/// Non-2xx statuses map through [`SubmitError::from_status`]; a 2xx body
/// without a non-empty token is [`SubmitError::Malformed`].
pub fn decode_login(status: u16, body: &str) -> Result<LoginGrant, SubmitError> {
    if !is_success(status) {
        return Err(SubmitError::from_status(status, failure_detail(status, body)));
    }
    let grant = match serde_json::from_str::<LoginBody>(body) {
        Ok(LoginBody::Wrapped { message }) => message,
        Ok(LoginBody::Bare(grant)) => grant,
        Err(e) => return Err(SubmitError::Malformed(e.to_string())),
    };
    if grant.access_token.is_empty() {
        return Err(SubmitError::Malformed("empty access token".to_owned()));
    }
    Ok(grant)
}

/// Decode a `{message: string}` response such as `/apply-loan`'s.
///
/// # Errors
///
/// Same mapping as [`decode_login`].
pub fn decode_message(status: u16, body: &str) -> Result<String, SubmitError> {
    if !is_success(status) {
        return Err(SubmitError::from_status(status, failure_detail(status, body)));
    }
    serde_json::from_str::<MessageBody>(body)
        .map(|parsed| parsed.message)
        .map_err(|e| SubmitError::Malformed(e.to_string()))
}

/// Human-readable reason from a failure body.
///
/// Understands `{detail: string}` and FastAPI-style
/// `{detail: [{loc, msg}, ...]}`; anything else falls back to the status
/// and a trimmed excerpt of the body.
#[must_use]
pub fn failure_detail(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body).map(|parsed| parsed.detail) {
        Ok(Detail::Text(text)) if !text.is_empty() => text,
        Ok(Detail::Items(items)) if !items.is_empty() => items
            .iter()
            .map(render_item)
            .collect::<Vec<_>>()
            .join("; "),
        Ok(Detail::Other(value)) if !value.is_null() => value.to_string(),
        _ => fallback_detail(status, body),
    }
}

fn render_item(item: &DetailItem) -> String {
    let loc = item
        .loc
        .iter()
        .map(|part| match part {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".");
    if loc.is_empty() { item.msg.clone() } else { format!("{loc}: {}", item.msg) }
}

fn fallback_detail(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {status}");
    }
    let excerpt: String = trimmed.chars().take(BODY_EXCERPT_CHARS).collect();
    format!("HTTP {status}: {excerpt}")
}
