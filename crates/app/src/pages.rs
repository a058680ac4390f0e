//! Page view models: everything one page render needs, borrowed from the
//! loaded content.
//!
//! Each page carries the shared [`Navigation`] and the clinic identity used by
//! the nav bar and footer, plus its own sections.

use clinic_domain::catalog::Catalog;
use clinic_domain::content::{
    AboutContent, ClinicInfo, ContactContent, HomeContent, HoursEntry, Stat,
};
use clinic_domain::form::ContactForm;
use clinic_domain::menu::Navigation;
use clinic_domain::selector::ServiceSelector;
use clinic_domain::service::Service;

/// Parts shared by every page.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub nav: Navigation,
    pub clinic: &'a ClinicInfo,
}

/// `/`: landing page.
#[derive(Debug, Clone)]
pub struct HomePage<'a> {
    pub frame: Frame<'a>,
    pub home: &'a HomeContent,
    pub hours: &'a [HoursEntry],
    pub booking: ContactForm,
}

impl<'a> HomePage<'a> {
    /// Stats animated by scroll-triggered counters.
    #[must_use]
    pub fn stats(&self) -> &'a [Stat] {
        &self.home.stats
    }
}

/// `/services`: selector list and detail panel.
#[derive(Debug, Clone)]
pub struct ServicesPage<'a> {
    pub frame: Frame<'a>,
    pub selector: ServiceSelector<'a>,
    pub hours: &'a [HoursEntry],
    pub message: ContactForm,
}

impl<'a> ServicesPage<'a> {
    /// All services, in catalog order.
    #[must_use]
    pub fn services(&self) -> &'a [Service] {
        self.selector.catalog().as_slice()
    }

    /// The service shown in the detail panel.
    #[must_use]
    pub fn selected(&self) -> &'a Service {
        self.selector.current()
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.selector.catalog()
    }
}

/// `/about`: story, team and values.
#[derive(Debug, Clone)]
pub struct AboutPage<'a> {
    pub frame: Frame<'a>,
    pub about: &'a AboutContent,
}

/// `/contact`: message form, opening hours and location.
#[derive(Debug, Clone)]
pub struct ContactPage<'a> {
    pub frame: Frame<'a>,
    pub contact: &'a ContactContent,
    pub hours: &'a [HoursEntry],
    pub message: ContactForm,
}
