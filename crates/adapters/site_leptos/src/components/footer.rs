use leptos::prelude::*;

use crate::site::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let clinic = use_site().content.clinic.clone();

    view! {
        <footer class="site-footer">
            <div class="container grid">
                <div>
                    <h3>{clinic.name.clone()}</h3>
                    {clinic.address.iter().map(|line| view! { <p>{line.clone()}</p> }).collect_view()}
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <p><a href=clinic.phone.href.clone()>{clinic.phone.label.clone()}</a></p>
                    <p><a href=clinic.email.href.clone()>{clinic.email.label.clone()}</a></p>
                </div>
                <div>
                    <h3>"Follow Us"</h3>
                    {clinic
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <p><a href=social.href.clone() rel="noopener">{social.label.clone()}</a></p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="copyright">
                {format!("\u{a9} {} {}. All rights reserved.", clinic.copyright_year, clinic.name)}
            </p>
        </footer>
    }
}
