use super::*;

#[test]
fn checker_collects_every_violation() {
    let mut check = Checker::new();
    assert_eq!(check.text(Field::ApplicantName, "   "), None);
    assert_eq!(check.text(Field::AadharNo, "1234567890123"), None);
    assert_eq!(check.whole(Field::LoanTerm, "12.5", 1), None);
    let errors = check.finish().expect_err("three errors");
    assert_eq!(errors.errors().len(), 3);
    assert!(errors.has(Field::ApplicantName));
    assert!(errors.has(Field::AadharNo));
    assert!(errors.has(Field::LoanTerm));
}

#[test]
fn bounded_uses_field_bounds_when_present() {
    let mut check = Checker::new();
    assert_eq!(check.bounded(Field::LoanAmount, "1000", 0.0), Some(1000.0));
    assert_eq!(check.bounded(Field::LoanAmount, "999.99", 0.0), None);
    assert_eq!(check.bounded(Field::LoanAmount, "100000000", 0.0), None);
    assert_eq!(check.bounded(Field::AnnualInterestRate, "0", 0.0), Some(0.0));
    assert_eq!(check.bounded(Field::AnnualInterestRate, "-1", 0.0), None);
}

#[test]
fn number_rejects_non_finite_text() {
    let mut check = Checker::new();
    assert_eq!(check.number(Field::LoanAmount, "inf"), None);
    assert_eq!(check.number(Field::LoanAmount, "NaN"), None);
    assert_eq!(check.number(Field::LoanAmount, "abc"), None);
    assert_eq!(check.number(Field::LoanAmount, " 2500.5 "), Some(2500.5));
}

#[test]
fn secret_keeps_surrounding_whitespace() {
    let mut check = Checker::new();
    assert_eq!(check.secret(Field::Password, " pass "), Some(" pass ".to_owned()));
    assert_eq!(check.secret(Field::Password, ""), None);
}

#[test]
fn email_shape() {
    assert!(looks_like_email("a@b.com"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a b@c.com"));
    assert!(!looks_like_email("a@b@c"));
}
