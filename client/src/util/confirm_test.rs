#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn declines_outside_browser() {
    assert!(!BrowserConfirm.confirm("Delete?"));
}
