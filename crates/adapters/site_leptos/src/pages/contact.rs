use clinic_domain::form::ContactForm;
use leptos::prelude::*;

use crate::components::{ContactFormView, OpeningHours};
use crate::site::use_site;

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site();
    let hero = site.content.contact.hero.clone();
    let clinic = site.content.clinic.clone();
    let address = clinic.address_line();

    view! {
        <section class="hero">
            <div class="container">
                <h1>{hero.title}</h1>
                <p>{hero.subtitle}</p>
            </div>
        </section>

        <section>
            <div class="container grid">
                <ContactFormView form=ContactForm::message()/>
                <div>
                    <div class="card">
                        <h2>"Contact Information"</h2>
                        <p>{address.clone()}</p>
                        <p><a href=clinic.phone.href>{clinic.phone.label}</a></p>
                        <p><a href=clinic.email.href>{clinic.email.label}</a></p>
                    </div>
                    <OpeningHours/>
                </div>
            </div>
        </section>

        <section class="alt">
            <div class="container">
                <h2>"Find Us"</h2>
                <div class="card map">
                    <p>{address}</p>
                </div>
            </div>
        </section>
    }
}
