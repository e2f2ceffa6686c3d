use super::*;

#[test]
fn from_status_splits_client_and_server_faults() {
    assert_eq!(
        SubmitError::from_status(401, "Invalid credentials".to_owned()),
        SubmitError::Rejected { status: 401, detail: "Invalid credentials".to_owned() }
    );
    assert_eq!(
        SubmitError::from_status(502, "bad gateway".to_owned()),
        SubmitError::Server { status: 502, detail: "bad gateway".to_owned() }
    );
}

#[test]
fn detail_prefers_server_text() {
    let err = SubmitError::Rejected { status: 404, detail: "User not found".to_owned() };
    assert_eq!(err.detail(), "User not found");
    assert_eq!(SubmitError::NotSignedIn.detail(), "not signed in");
    assert_eq!(SubmitError::Transport("connection refused".to_owned()).detail(), "network error: connection refused");
}

#[test]
fn below_minimum_message_names_field_and_bound() {
    let err = FieldError::BelowMinimum { field: Field::LoanAmount, min: 1000.0 };
    assert_eq!(err.to_string(), "Loan Amount is below minimum of 1000");
}

#[test]
fn validation_errors_join_with_semicolons() {
    let errors = ValidationErrors::new(vec![
        FieldError::Required { field: Field::ApplicantName },
        FieldError::TooLong { field: Field::PanNo, max: 10 },
    ]);
    assert_eq!(
        errors.to_string(),
        "Applicant Name is required; PAN Number must be at most 10 characters"
    );
    assert!(errors.has(Field::PanNo));
    assert!(!errors.has(Field::LoanAmount));
}

#[test]
fn storage_error_converts_to_submit_error() {
    let err: SubmitError = StorageError("quota exceeded".to_owned()).into();
    assert_eq!(err, SubmitError::Storage("quota exceeded".to_owned()));
    assert_eq!(err.to_string(), "token storage failed: quota exceeded");
}
