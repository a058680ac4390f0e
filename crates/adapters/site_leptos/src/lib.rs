use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
mod pages;
pub mod site;

use components::{Footer, Nav};
use pages::{About, Contact, Home, NotFound, Services};
use site::Site;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let site = match Site::builtin() {
        Ok(site) => Arc::new(site),
        Err(err) => {
            leptos::logging::error!("invalid site content: {err}");
            return view! { <p class="error">"The site content could not be loaded."</p> }
                .into_any();
        }
    };
    provide_context(site);

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("services") view=Services/>
                    <Route path=path!("about") view=About/>
                    <Route path=path!("contact") view=Contact/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
    .into_any()
}
