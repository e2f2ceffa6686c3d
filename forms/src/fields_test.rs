use super::*;

#[test]
fn from_key_resolves_every_field() {
    for field in Field::SIGN_IN.into_iter().chain(Field::LOAN) {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("bank_name"), None);
}

#[test]
fn loan_fields_are_unique() {
    let mut keys: Vec<&str> = Field::LOAN.iter().map(|field| field.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Field::LOAN.len());
}

#[test]
fn max_len_matches_widget_hints() {
    assert_eq!(Field::AadharNo.max_len(), Some(12));
    assert_eq!(Field::PanNo.max_len(), Some(10));
    assert_eq!(Field::AccountNo.max_len(), Some(15));
    assert_eq!(Field::IfscCode.max_len(), Some(10));
    assert_eq!(Field::ApplicantName.max_len(), None);
}

#[test]
fn select_fields_expose_their_literals() {
    assert_eq!(Field::LoanType.input_kind(), InputKind::Select);
    assert_eq!(Field::LoanType.options().len(), 6);
    assert_eq!(Field::EmploymentDetails.options().len(), 5);
    assert!(Field::ApplicantName.options().is_empty());
}

#[test]
fn html_type_is_absent_for_selects() {
    assert_eq!(InputKind::Select.html_type(), None);
    assert_eq!(Field::Email.input_kind().html_type(), Some("email"));
    assert_eq!(Field::LoanAmount.input_kind().html_type(), Some("number"));
}

#[test]
fn display_uses_label() {
    assert_eq!(Field::PanNo.to_string(), "PAN Number");
}
