//! Form collecting a new link.

use leptos::prelude::*;
use links::Field;

use crate::app::SharedStore;
use crate::state::shelf::invalid_field;

/// Add-link form. Validation and feedback come from the store; the form only
/// clears itself on success and highlights the offending field on rejection.
#[component]
pub fn LinkForm(store: SharedStore) -> impl IntoView {
    let author = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<Field>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (a, n, u) = (author.get_untracked(), name.get_untracked(), url.get_untracked());

        let mut result = None;
        store.update_value(|s| result = Some(s.add(&a, &n, &u)));

        match result {
            Some(Ok(_)) => {
                author.set(String::new());
                name.set(String::new());
                url.set(String::new());
                invalid.set(None);
            }
            Some(Err(err)) => {
                tracing::debug!(code = err.error_code(), "link rejected");
                invalid.set(invalid_field(&err));
            }
            None => {}
        }
    };

    view! {
        <form id="crear-link-form" class="link-form" novalidate=true on:submit=on_submit>
            <FormField label="Author" field=Field::Author value=author invalid=invalid/>
            <FormField label="Name" field=Field::Name value=name invalid=invalid/>
            <FormField label="URL" field=Field::Url value=url invalid=invalid input_type="url"/>
            <button type="submit" class="btn btn--primary">"Save link"</button>
        </form>
    }
}

/// Labelled input whose error class clears on focus.
#[component]
fn FormField(
    label: &'static str,
    field: Field,
    value: RwSignal<String>,
    invalid: RwSignal<Option<Field>>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let id = format!("link-{}", field.label());

    view! {
        <label class="link-form__label" for=id.clone()>
            {label}
            <input
                id=id.clone()
                class="link-form__input"
                class:error=move || invalid.get() == Some(field)
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| {
                    if invalid.get_untracked() == Some(field) {
                        invalid.set(None);
                    }
                }
            />
        </label>
    }
}
