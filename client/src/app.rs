//! Root application component and the shared link store.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use links::{LinkStore, StoreConfig};

use crate::components::{link_form::LinkForm, link_grid::LinkGrid, status_line::StatusLine};
use crate::state::shelf::LinksState;
use crate::util::{confirm::BrowserConfirm, local_storage::BrowserStorage, presenter::SignalPresenter};

/// Store handle shared by every component on the page.
pub type SharedStore = StoredValue<LinkStore<BrowserStorage>>;

/// Root application component.
///
/// Opens the store once; loading pushes the first view and any corruption
/// notice into `LinksState` before the page renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(LinksState::default());
    provide_context(state);

    let store: SharedStore = StoredValue::new(LinkStore::open(
        BrowserStorage,
        StoreConfig::default(),
        BrowserConfirm,
        SignalPresenter::new(state),
    ));

    view! {
        <Title text="Saved links"/>
        <main class="links-page">
            <section class="links-page__form" aria-labelledby="add-link-title">
                <h1 id="add-link-title">"Add a link"</h1>
                <LinkForm store=store/>
            </section>
            <section class="links-page__grid">
                <LinkGrid store=store/>
            </section>
            <StatusLine/>
        </main>
    }
}
