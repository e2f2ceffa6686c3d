use super::*;

#[test]
fn notice_class_reflects_level() {
    assert_eq!(notice_class(NoticeLevel::Success), "notice notice--success");
    assert_eq!(notice_class(NoticeLevel::Failure), "notice notice--failure");
}
