//! `window.confirm` as the store's confirmation policy.

use links::Confirm;

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Blocking modal confirmation. Declines when no window is available or the
/// dialog cannot be shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prompt;
            false
        }
    }
}
