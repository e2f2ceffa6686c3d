//! Shared form model, validation and submission flow for the loan desk.
//!
//! This crate owns everything the browser UI (`loandesk-client`) and the native CLI
//! (`loandesk`) have in common: the typed records sent over the wire, the
//! controlled-input drafts behind each form, the session/token port, the
//! notification and navigation ports, and the two form controllers that tie
//! them together. It performs no I/O of its own; transports and storage are
//! supplied by the caller through the traits in [`api`], [`session`] and
//! [`notify`].

pub mod api;
pub mod application;
pub mod credentials;
pub mod error;
pub mod estimate;
pub mod fields;
pub mod flow;
pub mod loan;
pub mod notify;
pub mod session;
pub mod sign_in;
pub mod wire;

mod validate;

pub use api::LoanApi;
pub use application::{EmploymentType, LoanApplication, LoanDraft, LoanType};
pub use credentials::Credentials;
pub use error::{FieldError, StorageError, SubmitError, ValidationErrors};
pub use estimate::{Estimate, Installment};
pub use fields::{Field, InputKind};
pub use flow::Phase;
pub use loan::{LoanForm, submit_loan_application};
pub use notify::{HOME_PATH, NavigationLog, Navigator, Notice, NoticeLevel, NoticeLog, Notifier};
pub use session::{ACCESS_TOKEN_KEY, AccessToken, MemoryTokenStore, Session, TokenStore};
pub use sign_in::{SignInForm, submit_sign_in};
pub use wire::LoginGrant;

#[cfg(test)]
mod test_support;
