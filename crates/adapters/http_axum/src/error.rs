//! HTTP error response mapping.

use askama::Template;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use clinic_domain::error::ClinicError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn status_of(err: &ClinicError) -> StatusCode {
    match err {
        ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
        ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

fn message_of(err: &ClinicError) -> String {
    match err {
        ClinicError::Validation(inner) => inner.to_string(),
        ClinicError::NotFound(inner) => inner.to_string(),
    }
}

/// Maps [`ClinicError`] to a JSON response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ClinicError);

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        let body = ErrorBody {
            error: message_of(&self.0),
        };
        (status, Json(body)).into_response()
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: &'static str,
    pub message: String,
}

/// Errors raised while serving an HTML page.
#[derive(Debug)]
pub enum PageError {
    /// A domain lookup or invariant failed.
    Domain(ClinicError),
    /// The query string could not be read.
    BadQuery(String),
    /// No route matches the requested path.
    NotFound(String),
}

impl From<ClinicError> for PageError {
    fn from(err: ClinicError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(err) => (status_of(&err), message_of(&err)),
            Self::BadQuery(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::NotFound(path) => (StatusCode::NOT_FOUND, format!("no page at {path}")),
        };
        let template = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message,
        };
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                status.into_response()
            }
        }
    }
}
