use forms::{Field, MemoryTokenStore, NavigationLog, Notice, NoticeLog, Phase, TokenStore};
use leptos::reactive::owner::Owner;

use super::*;

fn grant(token: &str) -> Result<LoginGrant, SubmitError> {
    Ok(LoginGrant { access_token: token.to_owned() })
}

fn sign_in_signal() -> RwSignal<SignInForm> {
    let form = RwSignal::new(SignInForm::new());
    form.update(|f| {
        f.set(Field::Email, "a@b.com");
        f.set(Field::Password, "secret123");
    });
    form
}

#[test]
fn sign_in_completes_on_live_form() {
    let owner = Owner::new();
    owner.set();
    let form = sign_in_signal();
    let session = Session::new(MemoryTokenStore::default());
    let (notices, nav) = (NoticeLog::default(), NavigationLog::default());
    form.try_update(|f| f.begin_submit(&notices)).expect("alive").expect("valid");

    finish_sign_in(form, grant("tok-1"), &session, &notices, &nav).expect("sign in");

    assert_eq!(form.with_untracked(SignInForm::phase), Phase::Redirecting);
    assert_eq!(session.store().load().as_deref(), Some("tok-1"));
    assert_eq!(nav.paths(), vec!["/".to_owned()]);
}

#[test]
fn sign_in_result_is_kept_after_page_is_disposed() {
    let owner = Owner::new();
    owner.set();
    let form = sign_in_signal();
    let session = Session::new(MemoryTokenStore::default());
    let (notices, nav) = (NoticeLog::default(), NavigationLog::default());
    form.try_update(|f| f.begin_submit(&notices)).expect("alive").expect("valid");

    owner.cleanup();
    assert!(form.try_update(|_| ()).is_none());

    let token = finish_sign_in(form, grant("tok-1"), &session, &notices, &nav).expect("sign in");

    assert_eq!(token.as_str(), "tok-1");
    assert_eq!(session.store().load().as_deref(), Some("tok-1"));
    assert_eq!(session.store().writes(), 1);
    assert_eq!(notices.last(), Some(Notice::success("Login successful")));
    assert_eq!(nav.paths(), vec!["/".to_owned()]);
}

#[test]
fn failed_sign_in_after_disposal_still_notifies() {
    let owner = Owner::new();
    owner.set();
    let form = sign_in_signal();
    let session = Session::new(MemoryTokenStore::default());
    let (notices, nav) = (NoticeLog::default(), NavigationLog::default());
    owner.cleanup();

    let rejected = Err(SubmitError::Rejected { status: 401, detail: "Invalid credentials".to_owned() });
    finish_sign_in(form, rejected, &session, &notices, &nav).expect_err("401");

    assert_eq!(session.store().writes(), 0);
    assert_eq!(notices.last(), Some(Notice::failure("Error logging in: Invalid credentials")));
    assert!(nav.paths().is_empty());
}

#[test]
fn accepted_loan_is_announced_after_page_is_disposed() {
    let owner = Owner::new();
    owner.set();
    let form = RwSignal::new(LoanForm::new());
    let (notices, nav) = (NoticeLog::default(), NavigationLog::default());
    owner.cleanup();

    let message = finish_loan_application(form, Ok("Loan application submitted successfully".to_owned()), &notices, &nav)
        .expect("accepted");

    assert_eq!(message, "Loan application submitted successfully");
    assert_eq!(notices.last(), Some(Notice::success("Loan application submitted successfully")));
    assert_eq!(nav.paths(), vec!["/".to_owned()]);
}
