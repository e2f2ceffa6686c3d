use super::*;

fn grant(token: &str) -> LoginGrant {
    LoginGrant { access_token: token.to_owned() }
}

#[test]
fn new_session_has_no_token() {
    let session = Session::new(MemoryTokenStore::default());
    assert!(session.token().is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn sign_in_stores_grant_token() {
    let session = Session::new(MemoryTokenStore::default());
    let token = session.sign_in(&grant("tok-1")).expect("sign in");
    assert_eq!(token.as_str(), "tok-1");
    assert_eq!(session.store().load().as_deref(), Some("tok-1"));
    assert_eq!(session.store().writes(), 1);
}

#[test]
fn sign_in_rejects_empty_grant_without_writing() {
    let session = Session::new(MemoryTokenStore::default());
    assert!(session.sign_in(&grant("")).is_err());
    assert_eq!(session.store().writes(), 0);
}

#[test]
fn token_reads_latest_value_on_every_call() {
    let store = MemoryTokenStore::default();
    let session = Session::new(&store);
    assert!(session.token().is_none());
    store.save("late-token").expect("save");
    assert_eq!(session.token().map(|t| t.as_str().to_owned()).as_deref(), Some("late-token"));
}

#[test]
fn empty_stored_value_counts_as_signed_out() {
    let session = Session::new(MemoryTokenStore::with_token(""));
    assert!(session.token().is_none());
}

#[test]
fn sign_out_clears_token() {
    let session = Session::new(MemoryTokenStore::with_token("tok-1"));
    session.sign_out().expect("sign out");
    assert!(!session.is_signed_in());
}

#[test]
fn access_token_debug_is_redacted() {
    let token = AccessToken::new("super-secret").expect("token");
    assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
    assert!(AccessToken::new("").is_none());
}
