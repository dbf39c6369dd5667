use super::*;
use links::StorageError;

// =============================================================
// LinksState notices
// =============================================================

#[test]
fn links_state_defaults() {
    let s = LinksState::default();
    assert!(s.view.is_empty());
    assert!(s.notice.is_none());
    assert_eq!(s.status_class(), "form-status");
    assert_eq!(s.status_text(), "");
}

#[test]
fn show_notice_sets_status_line() {
    let mut s = LinksState::default();
    s.show_notice(Notice::success("Link added"));
    assert_eq!(s.status_class(), "form-status show success");
    assert_eq!(s.status_text(), "Link added");
}

#[test]
fn dismiss_clears_matching_notice() {
    let mut s = LinksState::default();
    let seq = s.show_notice(Notice::error("Please enter a valid URL"));
    assert!(s.dismiss_notice(seq));
    assert!(s.notice.is_none());
    assert!(!s.dismiss_notice(seq));
}

#[test]
fn stale_dismiss_leaves_newer_notice() {
    let mut s = LinksState::default();
    let first = s.show_notice(Notice::success("Link added"));
    let second = s.show_notice(Notice::success("Link deleted"));
    assert_ne!(first, second);
    assert!(!s.dismiss_notice(first));
    assert_eq!(s.status_text(), "Link deleted");
    assert!(s.dismiss_notice(second));
}

// =============================================================
// invalid_field
// =============================================================

#[test]
fn missing_field_highlights_that_field() {
    let err = StoreError::Rejected(Rejection::MissingField(Field::Name));
    assert_eq!(invalid_field(&err), Some(Field::Name));
}

#[test]
fn invalid_url_highlights_url() {
    let err = StoreError::Rejected(Rejection::InvalidUrl { url: "x".to_owned() });
    assert_eq!(invalid_field(&err), Some(Field::Url));
}

#[test]
fn storage_failures_highlight_nothing() {
    let err = StoreError::Persist(StorageError::WriteRejected("QuotaExceededError".to_owned()));
    assert_eq!(invalid_field(&err), None);
}
