//! Contact page: message form, opening hours and location.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;

use clinic_app::pages::ContactPage;
use clinic_domain::form::ContactForm;
use clinic_domain::menu::Page;

use super::{Chrome, PageQuery};
use crate::error::PageError;
use crate::state::AppState;

/// Contact page template.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    chrome: Chrome<'a>,
    page: ContactPage<'a>,
    form: ContactForm,
}

/// `GET /contact`
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let query = super::page_query(query)?;
    let page = state.site.contact(query.menu_state());
    let template = ContactTemplate {
        chrome: Chrome::new(&page.frame, Page::Contact.path()),
        form: page.message.clone(),
        page,
    };
    Ok(super::render(&template))
}
