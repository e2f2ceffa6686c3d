use super::*;

#[test]
fn trailing_slashes_are_trimmed() {
    let config = Config::new("http://localhost:8000//", "token.json", 5).expect("config");
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn https_is_accepted() {
    assert!(Config::new("https://loans.example.com", "token.json", 0).is_ok());
}

#[test]
fn non_http_schemes_are_rejected() {
    for raw in ["ftp://host", "localhost:8000", "http://", "   "] {
        let err = Config::new(raw, "token.json", 5).expect_err(raw);
        assert!(matches!(err, CliError::InvalidBaseUrl(_)), "{raw:?}");
    }
}

#[test]
fn defaults_parse() {
    let config = Config::new(DEFAULT_BASE_URL, DEFAULT_TOKEN_FILE, DEFAULT_TIMEOUT_SECS).expect("defaults");
    assert_eq!(config.token_file, PathBuf::from(".loandesk/token.json"));
}
