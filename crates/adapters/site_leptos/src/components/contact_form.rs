//! Display-only contact and booking forms. Submitting does nothing.

use clinic_domain::form::{ContactForm, FormField};
use leptos::prelude::*;
use web_sys::SubmitEvent;

fn field_view(field: FormField) -> impl IntoView {
    let input = if field.kind.is_textarea() {
        view! {
            <textarea id=field.id name=field.id rows="4" placeholder=field.placeholder_text()></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id
                name=field.id
                type=field.kind.input_type()
                placeholder=field.placeholder_text()
            />
        }
        .into_any()
    };

    view! {
        <label for=field.id>{field.label}</label>
        {input}
    }
}

#[component]
pub fn ContactFormView(form: ContactForm) -> impl IntoView {
    view! {
        <form class="card contact-form" on:submit=|ev: SubmitEvent| ev.prevent_default()>
            <h2>{form.title}</h2>
            {form.fields.into_iter().map(field_view).collect_view()}
            <button class="button" type="submit">{form.submit_label}</button>
        </form>
    }
}
