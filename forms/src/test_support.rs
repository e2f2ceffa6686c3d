//! In-memory API fake shared by the controller tests.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::LoanApi;
use crate::application::{LoanApplication, LoanDraft};
use crate::credentials::Credentials;
use crate::error::SubmitError;
use crate::fields::Field;
use crate::session::AccessToken;
use crate::wire::LoginGrant;

/// Records every call and answers with canned replies.
#[derive(Default)]
pub(crate) struct FakeApi {
    login_reply: Option<Result<LoginGrant, SubmitError>>,
    apply_reply: Option<Result<String, SubmitError>>,
    pub(crate) logins: RefCell<Vec<Credentials>>,
    pub(crate) applications: RefCell<Vec<(String, LoanApplication)>>,
}

impl FakeApi {
    pub(crate) fn granting(token: &str) -> Self {
        Self {
            login_reply: Some(Ok(LoginGrant { access_token: token.to_owned() })),
            ..Self::default()
        }
    }

    pub(crate) fn accepting(message: &str) -> Self {
        Self { apply_reply: Some(Ok(message.to_owned())), ..Self::default() }
    }

    pub(crate) fn failing(error: SubmitError) -> Self {
        Self {
            login_reply: Some(Err(error.clone())),
            apply_reply: Some(Err(error)),
            ..Self::default()
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.logins.borrow().len() + self.applications.borrow().len()
    }
}

#[async_trait(?Send)]
impl LoanApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, SubmitError> {
        self.logins.borrow_mut().push(credentials.clone());
        self.login_reply
            .clone()
            .unwrap_or_else(|| Err(SubmitError::Transport("no login reply configured".to_owned())))
    }

    async fn apply_loan(&self, token: &AccessToken, application: &LoanApplication) -> Result<String, SubmitError> {
        self.applications
            .borrow_mut()
            .push((token.as_str().to_owned(), application.clone()));
        self.apply_reply
            .clone()
            .unwrap_or_else(|| Err(SubmitError::Transport("no apply reply configured".to_owned())))
    }
}

/// A draft that passes validation.
pub(crate) fn valid_draft() -> LoanDraft {
    let mut draft = LoanDraft::default();
    for (field, value) in [
        (Field::ApplicantName, "Ravi Kumar"),
        (Field::AadharNo, "111122223333"),
        (Field::PanNo, "AAAPL1234C"),
        (Field::BankDetails, "Sample Bank, Park Street"),
        (Field::AccountNo, "123456789012"),
        (Field::IfscCode, "SMPL000001"),
        (Field::LoanAmount, "10000"),
        (Field::LoanType, "Personal"),
        (Field::AnnualInterestRate, "5"),
        (Field::LoanTerm, "12"),
        (Field::EmploymentDetails, "Others"),
    ] {
        draft.set(field, value);
    }
    draft
}
