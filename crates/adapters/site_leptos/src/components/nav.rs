//! Navigation bar with the mobile menu toggle.

use clinic_domain::menu::{MenuState, NavLink, Navigation, Page};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::site::use_site;

#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();
    let brand = site.content.clinic.brand.clone();
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MenuState::default());

    let navigation = move || {
        let page = pathname.with(|path| Page::from_path(path)).unwrap_or(Page::Home);
        Navigation::new(page, menu.get())
    };

    let link_view = move |link: NavLink| {
        view! {
            <a
                href=link.href
                class:active=link.active
                on:click=move |_| menu.update(MenuState::follow_link)
            >
                {link.label}
            </a>
        }
    };

    view! {
        <header class="site-header">
            <div class="container bar">
                <A href="/" attr:class="brand">{brand}</A>
                <nav class="nav-links">
                    {move || navigation().links().into_iter().map(link_view).collect_view()}
                </nav>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_expanded().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || if menu.get().is_expanded() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || menu.get().is_expanded()>
                <nav class="mobile-menu">
                    {move || navigation().mobile_links().into_iter().map(link_view).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
