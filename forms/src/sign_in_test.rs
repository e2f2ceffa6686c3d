use futures::executor::block_on;

use super::*;
use crate::notify::{NavigationLog, NoticeLevel, NoticeLog};
use crate::session::MemoryTokenStore;
use crate::test_support::FakeApi;

fn filled(email: &str, password: &str) -> SignInForm {
    let mut form = SignInForm::new();
    form.set(Field::Email, email);
    form.set(Field::Password, password);
    form
}

#[test]
fn inputs_reflect_every_keystroke() {
    let mut form = SignInForm::new();
    let mut typed = String::new();
    for ch in "a@b.com".chars() {
        typed.push(ch);
        form.set(Field::Email, typed.clone());
        assert_eq!(form.email(), typed);
        assert_eq!(form.value(Field::Email), typed);
    }
    assert!(!form.set(Field::LoanAmount, "1000"));
    assert_eq!(form.value(Field::LoanAmount), "");
}

#[test]
fn successful_login_stores_token_and_goes_home() {
    let api = FakeApi::granting("tok-1");
    let session = Session::new(MemoryTokenStore::default());
    let notices = NoticeLog::default();
    let nav = NavigationLog::default();
    let mut form = filled("a@b.com", "secret123");

    let token = block_on(submit_sign_in(&mut form, &api, &session, &notices, &nav)).expect("login");

    assert_eq!(token.as_str(), "tok-1");
    assert_eq!(*api.logins.borrow(), vec![Credentials::new("a@b.com", "secret123")]);
    assert_eq!(session.store().load().as_deref(), Some("tok-1"));
    assert_eq!(session.store().writes(), 1);
    assert_eq!(nav.paths(), vec!["/".to_owned()]);
    assert_eq!(notices.notices(), vec![Notice::success(LOGIN_SUCCESS_TEXT)]);
    assert_eq!(form.phase(), Phase::Redirecting);
    assert_eq!(form.email(), "");
    assert_eq!(form.password(), "");
}

#[test]
fn rejected_login_leaves_storage_untouched() {
    let api = FakeApi::failing(SubmitError::Rejected { status: 401, detail: "Invalid credentials".to_owned() });
    let session = Session::new(MemoryTokenStore::default());
    let notices = NoticeLog::default();
    let nav = NavigationLog::default();
    let mut form = filled("a@b.com", "wrong");

    let err = block_on(submit_sign_in(&mut form, &api, &session, &notices, &nav)).expect_err("401");

    assert!(matches!(err, SubmitError::Rejected { status: 401, .. }));
    assert_eq!(session.store().writes(), 0);
    assert!(nav.paths().is_empty());
    let notice = notices.last().expect("failure notice");
    assert_eq!(notice.level, NoticeLevel::Failure);
    assert_eq!(notice.text, "Error logging in: Invalid credentials");
    assert_eq!(form.phase(), Phase::Editing);
    assert_eq!(form.email(), "a@b.com");
}

#[test]
fn invalid_draft_never_reaches_the_network() {
    let api = FakeApi::granting("tok-1");
    let session = Session::new(MemoryTokenStore::default());
    let notices = NoticeLog::default();
    let nav = NavigationLog::default();
    let mut form = filled("not-an-email", "");

    let err = block_on(submit_sign_in(&mut form, &api, &session, &notices, &nav)).expect_err("invalid");

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(api.call_count(), 0);
    assert_eq!(notices.notices().len(), 1);
    assert_eq!(form.phase(), Phase::Editing);
}

#[test]
fn second_submit_while_in_flight_is_refused_silently() {
    let notices = NoticeLog::default();
    let mut form = filled("a@b.com", "secret123");

    form.begin_submit(&notices).expect("first submit");
    assert!(form.is_busy());
    assert_eq!(form.begin_submit(&notices), Err(SubmitError::InFlight));
    assert!(notices.notices().is_empty());
}

#[test]
fn storage_failure_is_reported_as_sign_in_failure() {
    struct ReadOnly;
    impl TokenStore for ReadOnly {
        fn load(&self) -> Option<String> {
            None
        }
        fn save(&self, _token: &str) -> Result<(), crate::error::StorageError> {
            Err(crate::error::StorageError("storage disabled".to_owned()))
        }
        fn clear(&self) -> Result<(), crate::error::StorageError> {
            Ok(())
        }
    }

    let api = FakeApi::granting("tok-1");
    let session = Session::new(ReadOnly);
    let notices = NoticeLog::default();
    let nav = NavigationLog::default();
    let mut form = filled("a@b.com", "secret123");

    let err = block_on(submit_sign_in(&mut form, &api, &session, &notices, &nav)).expect_err("storage");

    assert_eq!(err, SubmitError::Storage("storage disabled".to_owned()));
    assert!(nav.paths().is_empty());
    assert_eq!(form.phase(), Phase::Editing);
}
