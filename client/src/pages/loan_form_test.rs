use super::*;

#[test]
fn submit_label_tracks_busy_state() {
    assert_eq!(submit_label(false), "Submit application");
    assert_eq!(submit_label(true), "Submitting…");
}
