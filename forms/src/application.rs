//! Loan-application record and the draft it is validated from.
//!
//! DESIGN
//! ======
//! [`LoanDraft`] is the controlled-input state: every field is the exact
//! string the user typed or selected, and every field starts empty. Only
//! [`LoanDraft::validate`] produces a [`LoanApplication`], so a typed
//! application is always within bounds by construction.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::estimate::Estimate;
use crate::fields::Field;
use crate::validate::Checker;

/// Loan product requested by the applicant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    Business,
    Personal,
    Home,
    Vehicle,
    Education,
    Other,
}

impl LoanType {
    pub const ALL: [Self; 6] = [
        Self::Business,
        Self::Personal,
        Self::Home,
        Self::Vehicle,
        Self::Education,
        Self::Other,
    ];

    /// Wire literals in the same order as [`LoanType::ALL`].
    pub const LITERALS: [&'static str; 6] = ["Business", "Personal", "Home", "Vehicle", "Education", "Other"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Personal => "Personal",
            Self::Home => "Home",
            Self::Vehicle => "Vehicle",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// Applicant's employment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    Salaried,
    #[serde(rename = "Non-Salaried")]
    NonSalaried,
    Unemployed,
    Student,
    Others,
}

impl EmploymentType {
    pub const ALL: [Self; 5] = [
        Self::Salaried,
        Self::NonSalaried,
        Self::Unemployed,
        Self::Student,
        Self::Others,
    ];

    pub const LITERALS: [&'static str; 5] = ["Salaried", "Non-Salaried", "Unemployed", "Student", "Others"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::NonSalaried => "Non-Salaried",
            Self::Unemployed => "Unemployed",
            Self::Student => "Student",
            Self::Others => "Others",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// Validated loan application, serialized as the `/apply-loan` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant_name: String,
    pub aadhar_no: String,
    pub pan_no: String,
    pub bank_details: String,
    pub account_no: String,
    pub ifsc_code: String,
    pub loan_amount: f64,
    pub loan_type: LoanType,
    pub annual_interest_rate: f64,
    /// Repayment term in months.
    pub loan_term: u32,
    pub employment_details: EmploymentType,
}

/// Raw controlled-input values for the loan-application form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanDraft {
    applicant_name: String,
    aadhar_no: String,
    pan_no: String,
    bank_details: String,
    account_no: String,
    ifsc_code: String,
    loan_amount: String,
    loan_type: String,
    annual_interest_rate: String,
    loan_term: String,
    employment_details: String,
}

impl LoanDraft {
    fn slot(&self, field: Field) -> Option<&String> {
        match field {
            Field::ApplicantName => Some(&self.applicant_name),
            Field::AadharNo => Some(&self.aadhar_no),
            Field::PanNo => Some(&self.pan_no),
            Field::BankDetails => Some(&self.bank_details),
            Field::AccountNo => Some(&self.account_no),
            Field::IfscCode => Some(&self.ifsc_code),
            Field::LoanAmount => Some(&self.loan_amount),
            Field::LoanType => Some(&self.loan_type),
            Field::AnnualInterestRate => Some(&self.annual_interest_rate),
            Field::LoanTerm => Some(&self.loan_term),
            Field::EmploymentDetails => Some(&self.employment_details),
            Field::Email | Field::Password => None,
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::ApplicantName => Some(&mut self.applicant_name),
            Field::AadharNo => Some(&mut self.aadhar_no),
            Field::PanNo => Some(&mut self.pan_no),
            Field::BankDetails => Some(&mut self.bank_details),
            Field::AccountNo => Some(&mut self.account_no),
            Field::IfscCode => Some(&mut self.ifsc_code),
            Field::LoanAmount => Some(&mut self.loan_amount),
            Field::LoanType => Some(&mut self.loan_type),
            Field::AnnualInterestRate => Some(&mut self.annual_interest_rate),
            Field::LoanTerm => Some(&mut self.loan_term),
            Field::EmploymentDetails => Some(&mut self.employment_details),
            Field::Email | Field::Password => None,
        }
    }

    /// Current value of `field`; empty for fields not on this form.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.slot(field).map_or("", String::as_str)
    }

    /// Replace the value of `field` verbatim. Returns `false` when the field
    /// does not belong to the loan form.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Convert into a typed application, enforcing every length, type and
    /// bound constraint before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint in render order.
    pub fn validate(&self) -> Result<LoanApplication, ValidationErrors> {
        let mut check = Checker::new();
        let applicant_name = check.text(Field::ApplicantName, &self.applicant_name);
        let loan_amount = check.bounded(Field::LoanAmount, &self.loan_amount, 0.0);
        let loan_type = check.choice(Field::LoanType, &self.loan_type, LoanType::parse);
        let employment_details = check.choice(Field::EmploymentDetails, &self.employment_details, EmploymentType::parse);
        let aadhar_no = check.text(Field::AadharNo, &self.aadhar_no);
        let pan_no = check.text(Field::PanNo, &self.pan_no);
        let bank_details = check.text(Field::BankDetails, &self.bank_details);
        let account_no = check.text(Field::AccountNo, &self.account_no);
        let ifsc_code = check.text(Field::IfscCode, &self.ifsc_code);
        let annual_interest_rate = check.bounded(Field::AnnualInterestRate, &self.annual_interest_rate, 0.0);
        let loan_term = check.whole(Field::LoanTerm, &self.loan_term, 1);
        check.finish()?;

        match (
            applicant_name,
            aadhar_no,
            pan_no,
            bank_details,
            account_no,
            ifsc_code,
            loan_amount,
            loan_type,
            annual_interest_rate,
            loan_term,
            employment_details,
        ) {
            (
                Some(applicant_name),
                Some(aadhar_no),
                Some(pan_no),
                Some(bank_details),
                Some(account_no),
                Some(ifsc_code),
                Some(loan_amount),
                Some(loan_type),
                Some(annual_interest_rate),
                Some(loan_term),
                Some(employment_details),
            ) => Ok(LoanApplication {
                applicant_name,
                aadhar_no,
                pan_no,
                bank_details,
                account_no,
                ifsc_code,
                loan_amount,
                loan_type,
                annual_interest_rate,
                loan_term,
                employment_details,
            }),
            _ => Err(ValidationErrors::default()),
        }
    }

    /// Repayment preview from whatever amount, rate and term currently
    /// parse. Bounds are not enforced here; this only feeds a preview.
    #[must_use]
    pub fn estimate(&self) -> Option<Estimate> {
        let amount = self.loan_amount.trim().parse::<f64>().ok()?;
        let rate = self.annual_interest_rate.trim().parse::<f64>().ok()?;
        let term = self.loan_term.trim().parse::<u32>().ok()?;
        Estimate::compute(amount, rate, term)
    }
}
