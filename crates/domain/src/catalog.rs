//! Catalog: the fixed, ordered, non-empty list of services.

use std::collections::HashSet;

use crate::error::{ClinicError, ValidationError};
use crate::id::ServiceId;
use crate::service::Service;

/// Ordered collection of services with unique ids.
///
/// A `Catalog` can only be obtained through [`Catalog::new`], so every
/// instance holds at least one service and no duplicate ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// Validate and wrap a list of services, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] when the list is empty, when two
    /// services share an id, or when a service fails its own invariants.
    pub fn new(services: Vec<Service>) -> Result<Self, ClinicError> {
        if services.is_empty() {
            return Err(ValidationError::EmptyCatalog.into());
        }
        let mut seen = HashSet::with_capacity(services.len());
        for service in &services {
            service.validate()?;
            if !seen.insert(service.id) {
                return Err(ValidationError::DuplicateServiceId(service.id).into());
            }
        }
        Ok(Self { services })
    }

    /// The first service in catalog order.
    #[must_use]
    pub fn first(&self) -> &Service {
        // `new` rejects empty lists.
        &self.services[0]
    }

    #[must_use]
    pub fn get(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ServiceId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.services.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Service] {
        &self.services
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
