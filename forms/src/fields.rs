//! Field identifiers and the input-widget hints attached to them.
//!
//! DESIGN
//! ======
//! One enum names every editable field across both forms. The same table
//! drives widget attributes in the browser (`maxlength`, `type`, `min`/`max`),
//! the CLI flag set, and the bounds enforced by validation, so the three can
//! never drift apart.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::fmt;

use crate::application::{EmploymentType, LoanType};

/// Smallest loan amount accepted by the application form.
pub const LOAN_AMOUNT_MIN: f64 = 1_000.0;
/// Largest loan amount accepted by the application form.
pub const LOAN_AMOUNT_MAX: f64 = 99_999_999.0;

/// Every editable field on the sign-in and loan-application forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    ApplicantName,
    AadharNo,
    PanNo,
    BankDetails,
    AccountNo,
    IfscCode,
    LoanAmount,
    LoanType,
    AnnualInterestRate,
    LoanTerm,
    EmploymentDetails,
}

/// Widget flavour used to render a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Number,
    Select,
}

impl InputKind {
    /// HTML `type` attribute for `<input>` elements. Selects have none.
    #[must_use]
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Password => Some("password"),
            Self::Number => Some("number"),
            Self::Select => None,
        }
    }
}

impl Field {
    /// Sign-in fields in render order.
    pub const SIGN_IN: [Self; 2] = [Self::Email, Self::Password];

    /// Loan-application fields in render order.
    pub const LOAN: [Self; 11] = [
        Self::ApplicantName,
        Self::LoanAmount,
        Self::LoanType,
        Self::EmploymentDetails,
        Self::AadharNo,
        Self::PanNo,
        Self::BankDetails,
        Self::AccountNo,
        Self::IfscCode,
        Self::AnnualInterestRate,
        Self::LoanTerm,
    ];

    /// JSON key used on the wire and as the HTML `name` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ApplicantName => "applicant_name",
            Self::AadharNo => "aadhar_no",
            Self::PanNo => "pan_no",
            Self::BankDetails => "bank_details",
            Self::AccountNo => "account_no",
            Self::IfscCode => "ifsc_code",
            Self::LoanAmount => "loan_amount",
            Self::LoanType => "loan_type",
            Self::AnnualInterestRate => "annual_interest_rate",
            Self::LoanTerm => "loan_term",
            Self::EmploymentDetails => "employment_details",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ApplicantName => "Applicant Name",
            Self::AadharNo => "Aadhar Number",
            Self::PanNo => "PAN Number",
            Self::BankDetails => "Bank Details",
            Self::AccountNo => "Account Number",
            Self::IfscCode => "IFSC Code",
            Self::LoanAmount => "Loan Amount",
            Self::LoanType => "Loan Type",
            Self::AnnualInterestRate => "Annual Interest Rate",
            Self::LoanTerm => "Loan Term (months)",
            Self::EmploymentDetails => "Employment Details",
        }
    }

    /// Look up a field by its wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::SIGN_IN
            .into_iter()
            .chain(Self::LOAN)
            .find(|field| field.key() == key)
    }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Password => InputKind::Password,
            Self::LoanAmount => InputKind::Number,
            Self::LoanType | Self::EmploymentDetails => InputKind::Select,
            _ => InputKind::Text,
        }
    }

    /// Maximum length in characters, where the form imposes one.
    #[must_use]
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::AadharNo => Some(12),
            Self::PanNo | Self::IfscCode | Self::AnnualInterestRate | Self::LoanTerm => Some(10),
            Self::AccountNo => Some(15),
            _ => None,
        }
    }

    /// Inclusive numeric bounds hinted on the widget.
    #[must_use]
    pub fn numeric_bounds(self) -> Option<(f64, f64)> {
        match self {
            Self::LoanAmount => Some((LOAN_AMOUNT_MIN, LOAN_AMOUNT_MAX)),
            _ => None,
        }
    }

    /// Allowed literals for select fields; empty for free-text fields.
    #[must_use]
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::LoanType => &LoanType::LITERALS,
            Self::EmploymentDetails => &EmploymentType::LITERALS,
            _ => &[],
        }
    }

    /// Placeholder text shown while the field is empty.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::LoanAmount => "Rs. 10000",
            Self::AnnualInterestRate => "e.g. 8.5",
            Self::LoanTerm => "e.g. 24",
            Self::LoanType | Self::EmploymentDetails => "Select…",
            _ => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
