//! Accumulating field checker shared by the draft validators.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::error::{FieldError, ValidationErrors};
use crate::fields::Field;

/// Runs per-field checks and collects every violation instead of stopping
/// at the first one. Each check returns the parsed value on success.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn reject<T>(&mut self, error: FieldError) -> Option<T> {
        self.errors.push(error);
        None
    }

    /// Required text, trimmed, within the field's length ceiling.
    pub(crate) fn text(&mut self, field: Field, raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return self.reject(FieldError::Required { field });
        }
        if let Some(max) = field.max_len() {
            if value.chars().count() > max {
                return self.reject(FieldError::TooLong { field, max });
            }
        }
        Some(value.to_owned())
    }

    /// Required secret, kept verbatim.
    pub(crate) fn secret(&mut self, field: Field, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return self.reject(FieldError::Required { field });
        }
        Some(raw.to_owned())
    }

    pub(crate) fn email(&mut self, field: Field, raw: &str) -> Option<String> {
        let value = self.text(field, raw)?;
        if !looks_like_email(&value) {
            return self.reject(FieldError::InvalidEmail { field });
        }
        Some(value)
    }

    pub(crate) fn number(&mut self, field: Field, raw: &str) -> Option<f64> {
        let value = self.text(field, raw)?;
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Some(number),
            _ => self.reject(FieldError::NotANumber { field }),
        }
    }

    /// Number within `field`'s inclusive bounds, or at least `min` when the
    /// field has no upper bound.
    pub(crate) fn bounded(&mut self, field: Field, raw: &str, min: f64) -> Option<f64> {
        let value = self.number(field, raw)?;
        let (min, max) = field.numeric_bounds().unwrap_or((min, f64::INFINITY));
        if value < min {
            return self.reject(FieldError::BelowMinimum { field, min });
        }
        if value > max {
            return self.reject(FieldError::AboveMaximum { field, max });
        }
        Some(value)
    }

    pub(crate) fn whole(&mut self, field: Field, raw: &str, min: u32) -> Option<u32> {
        let value = self.text(field, raw)?;
        let Ok(number) = value.parse::<u32>() else {
            return self.reject(FieldError::NotAWholeNumber { field });
        };
        if number < min {
            return self.reject(FieldError::BelowMinimum { field, min: f64::from(min) });
        }
        Some(number)
    }

    /// One of the field's select options.
    pub(crate) fn choice<T>(&mut self, field: Field, raw: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
        let value = self.text(field, raw)?;
        match parse(&value) {
            Some(choice) => Some(choice),
            None => self.reject(FieldError::UnknownOption { field, value }),
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }
}

/// Loose `local@domain` shape check, matching what an `<input type="email">`
/// accepts.
pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}
