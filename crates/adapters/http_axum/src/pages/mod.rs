//! Server-side rendered site pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod about;
#[allow(clippy::missing_errors_doc)]
pub mod contact;
#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use askama::Template;
use axum::Router;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;

use clinic_app::pages::Frame;
use clinic_domain::content::ClinicInfo;
use clinic_domain::menu::{MenuState, NavLink};

use crate::error::PageError;
use crate::state::AppState;

/// Query value that expands the mobile menu.
const MENU_OPEN: &str = "open";

/// Build the site sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/services", get(services::index))
        .route("/about", get(about::index))
        .route("/contact", get(contact::index))
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> PageError {
    PageError::NotFound(uri.path().to_string())
}

/// UI state carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` expands the mobile menu.
    pub menu: Option<String>,
    /// Selected service id on `/services`.
    pub service: Option<String>,
}

impl PageQuery {
    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        match self.menu.as_deref() {
            Some(MENU_OPEN) => MenuState::Expanded,
            _ => MenuState::Collapsed,
        }
    }
}

/// Unwrap the page query.
///
/// # Errors
///
/// Returns [`PageError::BadQuery`] when the query string was rejected, so
/// the caller answers with the HTML error page.
pub fn page_query(
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<PageQuery, PageError> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| PageError::BadQuery(rejection.body_text()))
}

/// Append `menu=open` to `base` when `menu` is expanded.
fn with_menu(base: &str, menu: MenuState) -> String {
    if !menu.is_expanded() {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}menu={MENU_OPEN}")
}

/// Navigation bar and footer data, shared by every template.
pub struct Chrome<'a> {
    pub clinic: &'a ClinicInfo,
    pub links: Vec<NavLink>,
    pub mobile_links: Vec<NavLink>,
    pub menu_open: bool,
    /// Where the menu button leads: the same page with the menu flipped.
    pub toggle_href: String,
}

impl<'a> Chrome<'a> {
    /// `base` is the current page's URL without the menu parameter.
    #[must_use]
    pub fn new(frame: &Frame<'a>, base: &str) -> Self {
        Self {
            clinic: frame.clinic,
            links: frame.nav.links(),
            mobile_links: frame.nav.mobile_links(),
            menu_open: frame.nav.menu.is_expanded(),
            toggle_href: with_menu(base, frame.nav.after_toggle()),
        }
    }
}

/// Render a template into an HTML response, logging render failures.
pub fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
