//! Content shared by every page through the Leptos context.

use std::sync::Arc;

use clinic_domain::catalog::Catalog;
use clinic_domain::content::SiteContent;
use clinic_domain::error::ClinicError;
use leptos::prelude::*;

/// Loaded content plus its validated catalog.
#[derive(Debug)]
pub struct Site {
    pub content: SiteContent,
    pub catalog: Catalog,
}

impl Site {
    /// The clinic's builtin copy.
    pub fn builtin() -> Result<Self, ClinicError> {
        let content = clinic_domain::builtin::content();
        let catalog = content.catalog()?;
        Ok(Self { content, catalog })
    }
}

/// Content provided by [`App`](crate::App).
pub fn use_site() -> Arc<Site> {
    expect_context::<Arc<Site>>()
}
