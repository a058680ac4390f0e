//! Service selector with its detail panel.

use clinic_domain::form::ContactForm;
use clinic_domain::id::ServiceId;
use clinic_domain::selector::ServiceSelector;
use clinic_domain::service::Service;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ContactFormView, OpeningHours};
use crate::site::use_site;

#[component]
fn ServiceDetail(service: Service) -> impl IntoView {
    view! {
        <article class="card detail fade-in">
            <img src=service.image alt=service.name.clone()/>
            <h2 class="detail-name">{service.name}</h2>
            <p>{service.long_description}</p>
            <p class="detail-price">{format!("${}", service.price)}</p>
            <p class="detail-duration">{format!("Duration: {}", service.duration)}</p>
            <h3>"Benefits"</h3>
            <ul>
                {service
                    .benefits
                    .into_iter()
                    .map(|benefit| view! { <li class="benefit">{benefit}</li> })
                    .collect_view()}
            </ul>
            <A href="/contact" attr:class="button">"Book Now"</A>
        </article>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let site = use_site();
    let selected = RwSignal::new(site.catalog.first().id);

    let entries = site
        .catalog
        .iter()
        .map(|service| {
            let id: ServiceId = service.id;
            view! {
                <button
                    type="button"
                    class:selected=move || selected.get() == id
                    on:click=move |_| selected.set(id)
                >
                    <strong>{service.name.clone()}</strong>
                    <span>{service.short_description.clone()}</span>
                </button>
            }
        })
        .collect_view();

    // Re-rendered per selection so the panel's fade-in replays.
    let detail = move || {
        let mut selector = ServiceSelector::new(&site.catalog);
        match selector.select(selected.get()) {
            Ok(service) => view! { <ServiceDetail service=service.clone()/> }.into_any(),
            Err(err) => view! { <p class="error">{err.to_string()}</p> }.into_any(),
        }
    };

    view! {
        <section class="hero">
            <div class="container">
                <h1>"Our Services"</h1>
                <p>"Explore our range of holistic treatments, each tailored to support your health and well-being."</p>
            </div>
        </section>

        <section>
            <div class="container grid">
                <nav class="card selector">
                    <h2>"Select a Service"</h2>
                    {entries}
                </nav>
                {detail}
            </div>
        </section>

        <section class="alt">
            <div class="container grid">
                <ContactFormView form=ContactForm::message()/>
                <OpeningHours/>
            </div>
        </section>
    }
}
