use clinic_domain::form::ContactForm;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ContactFormView, OpeningHours, StatCounter};
use crate::site::use_site;

#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();
    let clinic_name = site.content.clinic.name.clone();
    let home = site.content.home.clone();

    view! {
        <section class="hero">
            <div class="container">
                <h1>{home.hero.title}</h1>
                <p>{home.hero.subtitle}</p>
                <A href="/services" attr:class="button">{home.hero_cta}</A>
            </div>
        </section>

        <section>
            <div class="container grid">
                <img src=home.why_image alt="Why choose us"/>
                <div>
                    <h2>"Why Choose Us?"</h2>
                    <p>{home.why_text}</p>
                    <div class="grid stats">
                        {home.stats.into_iter().map(|stat| view! { <StatCounter stat/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <section class="alt">
            <div class="container">
                <h2>{format!("About {clinic_name}")}</h2>
                <p>{home.about_intro}</p>
                <div class="grid">
                    {home
                        .pillars
                        .into_iter()
                        .map(|pillar| view! {
                            <div class="card">
                                <h3>{pillar.title}</h3>
                                <p>{pillar.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section>
            <div class="container">
                <h2>"Our Services"</h2>
                <div class="grid">
                    {home
                        .offerings
                        .into_iter()
                        .map(|offering| view! {
                            <div class="card">
                                <img src=offering.image alt=offering.title.clone()/>
                                <h3>{offering.title}</h3>
                                <p>{offering.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="alt">
            <div class="container">
                <h2>"Our Facility"</h2>
                <p>{home.facility_intro}</p>
                <div class="grid gallery">
                    {home
                        .facility_images
                        .into_iter()
                        .enumerate()
                        .map(|(i, image)| view! { <img src=image alt=format!("Facility image {}", i + 1)/> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section>
            <div class="container grid">
                <ContactFormView form=ContactForm::booking()/>
                <OpeningHours/>
            </div>
        </section>
    }
}
