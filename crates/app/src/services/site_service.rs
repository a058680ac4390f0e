//! Site service: composes page view models from the loaded content.

use clinic_domain::catalog::Catalog;
use clinic_domain::content::SiteContent;
use clinic_domain::error::{ClinicError, NotFoundError};
use clinic_domain::form::ContactForm;
use clinic_domain::id::ServiceId;
use clinic_domain::menu::{MenuState, Navigation, Page};
use clinic_domain::selector::ServiceSelector;
use clinic_domain::service::Service;

use crate::pages::{AboutPage, ContactPage, Frame, HomePage, ServicesPage};

/// Application service rendering-side use-cases.
///
/// Holds the immutable content loaded at startup; every call is a pure
/// function of that content and the caller's UI state.
#[derive(Debug)]
pub struct SiteService {
    content: SiteContent,
    catalog: Catalog,
}

impl SiteService {
    /// Validate `content` and build the service.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] if the content does not hold a
    /// valid service catalog.
    pub fn new(content: SiteContent) -> Result<Self, ClinicError> {
        let catalog = content.catalog()?;
        tracing::debug!(services = catalog.len(), "site content loaded");
        Ok(Self { content, catalog })
    }

    /// Service backed by the clinic's builtin copy.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`SiteService::new`].
    pub fn builtin() -> Result<Self, ClinicError> {
        Self::new(clinic_domain::builtin::content())
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn frame(&self, page: Page, menu: MenuState) -> Frame<'_> {
        Frame {
            nav: Navigation::new(page, menu),
            clinic: &self.content.clinic,
        }
    }

    #[must_use]
    pub fn home(&self, menu: MenuState) -> HomePage<'_> {
        HomePage {
            frame: self.frame(Page::Home, menu),
            home: &self.content.home,
            hours: &self.content.hours,
            booking: ContactForm::booking(),
        }
    }

    /// Services page with `selected` shown in the detail panel, or the first
    /// catalog entry when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when `selected` is not in the catalog.
    #[tracing::instrument(skip(self))]
    pub fn services(
        &self,
        menu: MenuState,
        selected: Option<ServiceId>,
    ) -> Result<ServicesPage<'_>, ClinicError> {
        let mut selector = ServiceSelector::new(&self.catalog);
        if let Some(id) = selected {
            selector.select(id)?;
        }
        Ok(ServicesPage {
            frame: self.frame(Page::Services, menu),
            selector,
            hours: &self.content.hours,
            message: ContactForm::message(),
        })
    }

    #[must_use]
    pub fn about(&self, menu: MenuState) -> AboutPage<'_> {
        AboutPage {
            frame: self.frame(Page::About, menu),
            about: &self.content.about,
        }
    }

    #[must_use]
    pub fn contact(&self, menu: MenuState) -> ContactPage<'_> {
        ContactPage {
            frame: self.frame(Page::Contact, menu),
            contact: &self.content.contact,
            hours: &self.content.hours,
            message: ContactForm::message(),
        }
    }

    /// All services in catalog order.
    #[must_use]
    pub fn list_services(&self) -> &[Service] {
        self.catalog.as_slice()
    }

    /// Look up a service by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when no service with `id` exists.
    #[tracing::instrument(skip(self))]
    pub fn get_service(&self, id: ServiceId) -> Result<&Service, ClinicError> {
        self.catalog.get(id).ok_or_else(|| {
            NotFoundError {
                record: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_domain::error::ValidationError;

    fn service() -> SiteService {
        SiteService::builtin().unwrap()
    }

    #[test]
    fn should_reject_content_without_services() {
        let mut content = clinic_domain::builtin::content();
        content.services.clear();
        assert!(matches!(
            SiteService::new(content),
            Err(ClinicError::Validation(ValidationError::EmptyCatalog))
        ));
    }

    #[test]
    fn should_show_first_service_when_nothing_selected() {
        let site = service();
        let page = site.services(MenuState::Collapsed, None).unwrap();
        let selected = page.selected();
        assert_eq!(selected.id, ServiceId::new(1));
        assert_eq!(selected.name, "Massage Therapy");
        assert_eq!(selected.price, 80);
    }

    #[test]
    fn should_show_physiotherapy_when_id_3_selected() {
        let site = service();
        let page = site
            .services(MenuState::Collapsed, Some(ServiceId::new(3)))
            .unwrap();

        let selected = page.selected();
        assert_eq!(selected.name, "Physiotherapy");
        assert_eq!(selected.price, 100);
        assert_eq!(selected.duration, "45-60 minutes");
        assert_eq!(selected.benefits.len(), 4);
        assert_eq!(selected.benefits[0], "Improves mobility and flexibility");
        assert_eq!(selected.benefits[3], "Prevents future injuries");
        assert_eq!(page.services().len(), 5);
    }

    #[test]
    fn should_return_not_found_for_unknown_selection() {
        let site = service();
        let result = site.services(MenuState::Collapsed, Some(ServiceId::new(99)));
        assert!(matches!(result, Err(ClinicError::NotFound(_))));
    }

    #[test]
    fn should_carry_menu_state_into_navigation() {
        let site = service();
        let page = site.about(MenuState::Expanded);
        assert_eq!(page.frame.nav.current, Page::About);
        assert!(page.frame.nav.menu.is_expanded());
        assert_eq!(page.frame.nav.mobile_links().len(), 4);
    }

    #[test]
    fn should_attach_booking_form_to_home_and_message_form_to_contact() {
        let site = service();
        assert_eq!(site.home(MenuState::Collapsed).booking.submit_label, "Schedule Now");
        assert_eq!(site.contact(MenuState::Collapsed).message.submit_label, "Send Message");
    }

    #[test]
    fn should_expose_home_stats() {
        let site = service();
        let home = site.home(MenuState::Collapsed);
        let labels: Vec<_> = home.stats().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Happy Customers", "Years of Experience", "Customer Satisfaction"]
        );
    }

    #[test]
    fn should_get_service_by_id() {
        let site = service();
        assert_eq!(site.get_service(ServiceId::new(4)).unwrap().name, "Acupuncture");
        assert!(matches!(
            site.get_service(ServiceId::new(0)),
            Err(ClinicError::NotFound(_))
        ));
    }
}
