//! Saved-link card grid with empty state and bulk delete.

use leptos::prelude::*;
use links::CardView;
use links::render::{DELETE_TEXT, EMPTY_STATE_TEXT, OPEN_LINK_TEXT};

use crate::app::SharedStore;
use crate::state::shelf::LinksState;

/// Card grid driven by the store's latest [`links::GridView`].
///
/// Cards are keyed by id and position so accents and animation delays are
/// recomputed when a delete shifts the cards after it.
#[component]
pub fn LinkGrid(store: SharedStore) -> impl IntoView {
    let state = expect_context::<RwSignal<LinksState>>();
    let is_empty = move || state.with(|s| s.view.is_empty());

    let on_clear = move |_| {
        store.update_value(|s| {
            if let Err(err) = s.clear() {
                tracing::warn!(error = %err, "clearing links failed");
            }
        });
    };

    view! {
        <div class="links-grid__header">
            <h2>"Saved links"</h2>
            <button class="btn btn--danger" disabled=is_empty on:click=on_clear>
                "Delete all"
            </button>
        </div>
        <Show
            when=move || !is_empty()
            fallback=|| view! { <div id="empty-state" class="empty-state show" role="status">{EMPTY_STATE_TEXT}</div> }
        >
            <div id="links-grid" class="links-grid" aria-label=move || state.with(|s| s.view.aria_label())>
                <For
                    each=move || state.with(|s| s.view.cards().to_vec())
                    key=|card: &CardView| (card.id, card.index)
                    children=move |card: CardView| view! { <LinkCard card=card store=store/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn LinkCard(card: CardView, store: SharedStore) -> impl IntoView {
    let id = card.id;
    let card_style = format!("animation-delay: {};", card.animation_delay());
    let thumb_style = format!("background: {};", card.accent);

    let link = if card.has_safe_href() {
        view! {
            <a href=card.url.clone() class="project-link" target="_blank" rel="noopener noreferrer">
                {OPEN_LINK_TEXT}
            </a>
        }
        .into_any()
    } else {
        view! { <span class="project-link project-link--disabled">{card.url.clone()}</span> }.into_any()
    };

    let on_delete = move |_| {
        store.update_value(|s| {
            if let Err(err) = s.delete(id) {
                tracing::warn!(%id, error = %err, "deleting link failed");
            }
        });
    };

    view! {
        <article class="project-card" data-id=id.to_string() style=card_style>
            <div class="project-thumb" style=thumb_style></div>
            <div class="project-body">
                <h3>{card.name}</h3>
                <p>
                    <strong>{card.author}</strong>
                </p>
                {link}
                <button class="btn-delete" aria-label="Delete link" on:click=on_delete>
                    {DELETE_TEXT}
                </button>
            </div>
        </article>
    }
}
