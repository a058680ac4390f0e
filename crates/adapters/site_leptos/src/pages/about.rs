use leptos::prelude::*;
use leptos_router::components::A;

use crate::site::use_site;

#[component]
pub fn About() -> impl IntoView {
    let about = use_site().content.about.clone();

    view! {
        <section class="hero">
            <div class="container">
                <h1>{about.hero.title}</h1>
                <p>{about.hero.subtitle}</p>
            </div>
        </section>

        <section>
            <div class="container grid">
                <div>
                    <h2>"Our Story"</h2>
                    {about.story.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                </div>
                <img src=about.story_image alt="Our story"/>
            </div>
        </section>

        <section class="alt">
            <div class="container">
                <h2>"Meet Our Team"</h2>
                <div class="grid">
                    {about
                        .team
                        .into_iter()
                        .map(|member| view! {
                            <div class="card team-member">
                                <img src=member.photo alt=member.name.clone()/>
                                <h3>{member.name}</h3>
                                <p>{member.role}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section>
            <div class="container">
                <h2>"Our Values"</h2>
                <div class="grid">
                    {about
                        .values
                        .into_iter()
                        .map(|value| view! {
                            <div class="card">
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="hero">
            <div class="container">
                <h2>{about.cta.title}</h2>
                <p>{about.cta.subtitle}</p>
                <A href="/contact" attr:class="button">"Book an Appointment"</A>
            </div>
        </section>
    }
}
