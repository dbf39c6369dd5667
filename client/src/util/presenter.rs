//! Presenter that writes store output into reactive page state.
//!
//! TRADE-OFFS
//! ==========
//! Notices are cleared by a one-shot timer. A timer only clears the notice it
//! was scheduled for, so a quick second action keeps its message on screen
//! for the full duration.

use std::time::Duration;

use leptos::prelude::*;
use links::{GridView, Notice, Presenter};

use crate::state::shelf::LinksState;

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

#[derive(Clone, Copy, Debug)]
pub struct SignalPresenter {
    state: RwSignal<LinksState>,
}

impl SignalPresenter {
    #[must_use]
    pub fn new(state: RwSignal<LinksState>) -> Self {
        Self { state }
    }
}

impl Presenter for SignalPresenter {
    fn render(&mut self, view: &GridView) {
        let view = view.clone();
        self.state.update(|s| s.view = view);
    }

    fn notify(&mut self, notice: Notice) {
        let ttl = notice.ttl;
        let mut seq = 0;
        self.state.update(|s| seq = s.show_notice(notice));
        schedule_dismiss(self.state, seq, ttl);
    }
}

fn schedule_dismiss(state: RwSignal<LinksState>, seq: u64, ttl: Duration) {
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            state.update(|s| {
                s.dismiss_notice(seq);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (state, seq, ttl);
    }
}
