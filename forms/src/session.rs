//! Session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token returned by `/login` lives in a key-value store under
//! [`ACCESS_TOKEN_KEY`]: browser `localStorage` in the web client, a JSON
//! file in the CLI. [`Session`] wraps whichever [`TokenStore`] the front-end
//! provides and is passed explicitly to anything that issues authorized
//! requests. The token is read on every access, never cached, so a token
//! stored after a form was opened is still the one that gets sent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;
use crate::wire::LoginGrant;

/// Fixed storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Key-value backing for the access token.
pub trait TokenStore {
    /// Current raw token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the write.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// Non-empty bearer token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for an empty string; storage holding `""` means
    /// "signed out".
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Explicit session handle with a typed token accessor.
#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The most recently stored token.
    pub fn token(&self) -> Option<AccessToken> {
        self.store.load().and_then(AccessToken::new)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Persist the token from a login grant.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for an empty grant or a failed write.
    pub fn sign_in(&self, grant: &LoginGrant) -> Result<AccessToken, StorageError> {
        let token = AccessToken::new(grant.access_token.clone())
            .ok_or_else(|| StorageError("empty access token".to_owned()))?;
        self.store.save(token.as_str())?;
        Ok(token)
    }

    /// Forget the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot remove it.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-process token store. Counts writes so callers can assert that a
/// failed sign-in left storage untouched.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())), writes: AtomicUsize::new(0) }
    }

    /// Number of `save`/`clear` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
