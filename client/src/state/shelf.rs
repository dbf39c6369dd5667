//! Page state projected from the link store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store pushes views and notices into this struct through
//! `SignalPresenter`; components only read it.

#[cfg(test)]
#[path = "shelf_test.rs"]
mod shelf_test;

use links::{Field, GridView, Notice, Rejection, StoreError};

/// What the links page currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinksState {
    /// Latest rendered collection.
    pub view: GridView,
    /// Status line content, if any.
    pub notice: Option<Notice>,
    /// Incremented on every notice; lets stale timers leave newer notices alone.
    notice_seq: u64,
}

impl LinksState {
    /// Show `notice`, returning the sequence number needed to dismiss it.
    pub fn show_notice(&mut self, notice: Notice) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(notice);
        self.notice_seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) -> bool {
        if seq != self.notice_seq || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    /// Classes for the status line element.
    #[must_use]
    pub fn status_class(&self) -> String {
        match &self.notice {
            Some(notice) => format!("form-status show {}", notice.kind.css_class()),
            None => "form-status".to_owned(),
        }
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        self.notice.as_ref().map(|n| n.message.clone()).unwrap_or_default()
    }
}

/// Form field to highlight for a failed add.
#[must_use]
pub fn invalid_field(err: &StoreError) -> Option<Field> {
    match err {
        StoreError::Rejected(Rejection::MissingField(field)) => Some(*field),
        StoreError::Rejected(Rejection::InvalidUrl { .. }) => Some(Field::Url),
        _ => None,
    }
}
