//! Transient status line for store notices.

use leptos::prelude::*;

use crate::state::shelf::LinksState;

/// Shows the current notice; `SignalPresenter` clears it after its ttl.
#[component]
pub fn StatusLine() -> impl IntoView {
    let state = expect_context::<RwSignal<LinksState>>();

    view! {
        <p id="link-status" class=move || state.with(LinksState::status_class) role="status" aria-live="polite">
            {move || state.with(LinksState::status_text)}
        </p>
    }
}
