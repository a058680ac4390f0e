//! Home page: hero, counters, overview cards, gallery and booking block.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;

use clinic_app::pages::HomePage;
use clinic_domain::counter::{TICK_MILLIS, VISIBILITY_THRESHOLD};
use clinic_domain::form::ContactForm;
use clinic_domain::menu::Page;

use super::{Chrome, PageQuery};
use crate::error::PageError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    chrome: Chrome<'a>,
    page: HomePage<'a>,
    form: ContactForm,
    threshold: f64,
    tick_ms: u64,
}

/// `GET /`: landing page.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let query = super::page_query(query)?;
    let page = state.site.home(query.menu_state());
    let template = HomeTemplate {
        chrome: Chrome::new(&page.frame, Page::Home.path()),
        form: page.booking.clone(),
        page,
        threshold: VISIBILITY_THRESHOLD,
        tick_ms: TICK_MILLIS,
    };
    Ok(super::render(&template))
}
