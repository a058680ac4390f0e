use leptos::prelude::*;

use crate::site::use_site;

/// Opening hours card.
#[component]
pub fn OpeningHours() -> impl IntoView {
    let hours = use_site().content.hours.clone();

    view! {
        <div class="card hours">
            <h2>"Opening Hours"</h2>
            <dl>
                {hours
                    .into_iter()
                    .map(|entry| view! { <dt>{entry.days}</dt><dd>{entry.hours}</dd> })
                    .collect_view()}
            </dl>
        </div>
    }
}
