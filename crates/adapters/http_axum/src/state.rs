//! Shared application state for axum handlers.

use std::sync::Arc;

use clinic_app::services::site_service::SiteService;

/// Application state shared across all axum handlers.
///
/// The site service is immutable after startup, so handlers only ever clone
/// the `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Page composition over the loaded content.
    pub site: Arc<SiteService>,
}

impl AppState {
    /// Create a new application state from a site service.
    pub fn new(site: SiteService) -> Self {
        Self {
            site: Arc::new(site),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(site: Arc<SiteService>) -> Self {
        Self { site }
    }
}
