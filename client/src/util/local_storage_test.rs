#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn reads_report_unavailable_outside_browser() {
    let err = BrowserStorage.get_item("links").expect_err("no browser");
    assert!(matches!(err, StorageError::Unavailable(_)));
}

#[test]
fn writes_report_unavailable_outside_browser() {
    let err = BrowserStorage.set_item("links", "[]").expect_err("no browser");
    assert!(matches!(err, StorageError::Unavailable(_)));
}
