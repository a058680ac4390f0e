//! About page: story, team and values.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;

use clinic_app::pages::AboutPage;
use clinic_domain::menu::Page;

use super::{Chrome, PageQuery};
use crate::error::PageError;
use crate::state::AppState;

/// About page template.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    chrome: Chrome<'a>,
    page: AboutPage<'a>,
}

/// `GET /about`
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let query = super::page_query(query)?;
    let page = state.site.about(query.menu_state());
    let template = AboutTemplate {
        chrome: Chrome::new(&page.frame, Page::About.path()),
        page,
    };
    Ok(super::render(&template))
}
