//! Sign-in credential pair.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::fields::Field;
use crate::validate::Checker;

/// Email/password pair posted to `/login`.
///
/// Doubles as the sign-in draft: values are held exactly as typed until
/// [`Credentials::validate`] produces the copy that goes on the wire.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Check the `required` and `type="email"` constraints and return the
    /// trimmed pair. The password is never trimmed.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint.
    pub fn validate(&self) -> Result<Self, ValidationErrors> {
        let mut check = Checker::new();
        let email = check.email(Field::Email, &self.email);
        let password = check.secret(Field::Password, &self.password);
        check.finish()?;
        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(ValidationErrors::default()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
