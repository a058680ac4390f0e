//! Services page: selector list and detail panel.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;

use clinic_app::pages::ServicesPage;
use clinic_domain::error::{ClinicError, ValidationError};
use clinic_domain::form::ContactForm;
use clinic_domain::id::ServiceId;
use clinic_domain::menu::Page;

use super::{Chrome, PageQuery};
use crate::error::PageError;
use crate::state::AppState;

/// Services page template.
#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate<'a> {
    chrome: Chrome<'a>,
    page: ServicesPage<'a>,
    form: ContactForm,
}

fn parse_selection(raw: Option<&str>) -> Result<Option<ServiceId>, ClinicError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            ValidationError::MalformedServiceId {
                raw: raw.to_string(),
            }
            .into()
        }),
    }
}

/// `GET /services`: `?service=<id>` picks the service shown in the panel.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let query = super::page_query(query)?;
    let selected = parse_selection(query.service.as_deref())?;
    let page = state.site.services(query.menu_state(), selected)?;
    let base = match selected {
        Some(id) => format!("{}?service={id}", Page::Services.path()),
        None => Page::Services.path().to_string(),
    };
    let template = ServicesTemplate {
        chrome: Chrome::new(&page.frame, &base),
        form: page.message.clone(),
        page,
    };
    Ok(super::render(&template))
}
