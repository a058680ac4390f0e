//! Service selector: which catalog entry the detail panel shows.

use crate::catalog::Catalog;
use crate::error::{ClinicError, NotFoundError};
use crate::id::ServiceId;
use crate::service::Service;

/// Holds the currently selected service of a [`Catalog`].
///
/// The selection always resolves to an existing service: it starts on the
/// first catalog entry and [`select`](Self::select) refuses unknown ids.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSelector<'a> {
    catalog: &'a Catalog,
    selected: ServiceId,
}

impl<'a> ServiceSelector<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selected: catalog.first().id,
        }
    }

    /// Make `id` the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when `id` is not in the catalog. The
    /// previous selection is kept.
    pub fn select(&mut self, id: ServiceId) -> Result<&'a Service, ClinicError> {
        let service = self.catalog.get(id).ok_or_else(|| NotFoundError {
            record: "Service",
            id: id.to_string(),
        })?;
        self.selected = id;
        Ok(service)
    }

    /// The selected service.
    #[must_use]
    pub fn current(&self) -> &'a Service {
        self.catalog
            .get(self.selected)
            .unwrap_or_else(|| self.catalog.first())
    }

    #[must_use]
    pub fn is_selected(&self, id: ServiceId) -> bool {
        self.selected == id
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    fn catalog() -> Catalog {
        builtin::content().catalog().unwrap()
    }

    #[test]
    fn should_default_to_first_service() {
        let catalog = catalog();
        let selector = ServiceSelector::new(&catalog);
        let current = selector.current();
        assert_eq!(current.name, "Massage Therapy");
        assert_eq!(current.price, 80);
        assert_eq!(current.duration, "60 minutes");
        assert!(selector.is_selected(ServiceId::new(1)));
    }

    #[test]
    fn should_return_selected_service_for_every_id() {
        let catalog = catalog();
        let mut selector = ServiceSelector::new(&catalog);
        for service in &catalog {
            selector.select(service.id).unwrap();
            assert_eq!(selector.current().id, service.id);
        }
    }

    #[test]
    fn should_show_physiotherapy_details_when_id_3_selected() {
        let catalog = catalog();
        let mut selector = ServiceSelector::new(&catalog);

        selector.select(ServiceId::new(3)).unwrap();

        let current = selector.current();
        assert_eq!(current.name, "Physiotherapy");
        assert_eq!(current.price, 100);
        assert_eq!(current.duration, "45-60 minutes");
        assert_eq!(
            current.benefits,
            [
                "Improves mobility and flexibility",
                "Reduces pain and inflammation",
                "Enhances strength and coordination",
                "Prevents future injuries",
            ]
        );
    }

    #[test]
    fn should_keep_selection_when_id_unknown() {
        let catalog = catalog();
        let mut selector = ServiceSelector::new(&catalog);
        selector.select(ServiceId::new(2)).unwrap();

        let result = selector.select(ServiceId::new(42));

        assert!(matches!(result, Err(ClinicError::NotFound(_))));
        assert_eq!(selector.current().id, ServiceId::new(2));
    }
}
