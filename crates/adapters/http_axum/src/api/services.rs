//! JSON REST handlers for the service catalog.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use clinic_domain::error::{ClinicError, ValidationError};
use clinic_domain::id::ServiceId;
use clinic_domain::service::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services`: catalog order.
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.site.list_services().to_vec()))
}

/// `GET /api/services/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let service_id = ServiceId::from_str(&id).map_err(|_| {
        ApiError::from(ClinicError::Validation(
            ValidationError::MalformedServiceId { raw: id.clone() },
        ))
    })?;
    let service = state.site.get_service(service_id)?;
    Ok(GetResponse::Ok(Json(service.clone())))
}
