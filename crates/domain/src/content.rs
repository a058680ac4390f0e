//! Static site content: every table the pages render as-is.
//!
//! All records are plain data. [`SiteContent`] aggregates them and is loaded
//! once at startup, either from [`builtin`](crate::builtin) or from an
//! operator-supplied file.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::counter::Counter;
use crate::error::{ClinicError, ValidationError};
use crate::service::Service;

/// Everything the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub clinic: ClinicInfo,
    pub home: HomeContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub hours: Vec<HoursEntry>,
    pub services: Vec<Service>,
}

impl SiteContent {
    /// Check invariants and build the service [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] when the clinic has no name or
    /// when the services list does not form a valid catalog.
    pub fn catalog(&self) -> Result<Catalog, ClinicError> {
        if self.clinic.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "clinic.name",
            }
            .into());
        }
        Catalog::new(self.services.clone())
    }
}

/// Identity and contact details of the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicInfo {
    /// Display name, e.g. `Osteopraktik`.
    pub name: String,
    /// Wordmark shown in the navigation bar.
    pub brand: String,
    pub copyright_year: u16,
    pub address: Vec<String>,
    pub phone: ContactLink,
    pub email: ContactLink,
    pub socials: Vec<ContactLink>,
}

impl ClinicInfo {
    /// Address on a single line, e.g. for the compact location card.
    #[must_use]
    pub fn address_line(&self) -> String {
        self.address.join(" ")
    }
}

/// A labelled outbound link (`tel:`, `mailto:`, or an external URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// One line of the opening hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntry {
    pub days: String,
    /// Opening hours or `Closed`.
    pub hours: String,
}

/// A title/description card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

/// A core value of the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub title: String,
    pub description: String,
}

/// A practitioner shown on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub photo: String,
}

/// A figure animated by a scroll-triggered counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub end: i64,
    pub label: String,
}

impl Stat {
    /// Suffix appended to the number: `%` when the label mentions one.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        if self.label.contains('%') { "%" } else { "" }
    }

    /// Fresh counter for this stat.
    #[must_use]
    pub fn counter(&self) -> Counter {
        Counter::new(self.end)
    }

    /// Text of the number once the count-up has settled.
    #[must_use]
    pub fn settled(&self) -> String {
        format!("{}{}", self.end.max(0), self.suffix())
    }
}

/// Hero banner copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

/// Home page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero_cta: String,
    pub hero_image: String,
    pub why_image: String,
    pub why_text: String,
    pub about_intro: String,
    pub facility_intro: String,
    pub facility_images: Vec<String>,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub pillars: Vec<Highlight>,
    pub offerings: Vec<OfferingCard>,
}

/// A service overview card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingCard {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// About page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub story_image: String,
    pub story: Vec<String>,
    pub hero: Hero,
    pub team: Vec<TeamMember>,
    pub values: Vec<Value>,
    pub cta: Hero,
}

/// Contact page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub hero: Hero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_append_percent_only_when_label_mentions_it() {
        let plain = Stat {
            end: 98,
            label: "Customer Satisfaction".to_string(),
        };
        let percent = Stat {
            end: 98,
            label: "Satisfaction %".to_string(),
        };
        assert_eq!(plain.settled(), "98");
        assert_eq!(percent.settled(), "98%");
    }

    #[test]
    fn should_settle_negative_targets_at_zero() {
        let stat = Stat {
            end: -4,
            label: "Broken".to_string(),
        };
        assert_eq!(stat.settled(), "0");
    }

    #[test]
    fn should_reject_content_without_clinic_name() {
        let mut content = crate::builtin::content();
        content.clinic.name = String::new();
        assert!(matches!(
            content.catalog(),
            Err(ClinicError::Validation(ValidationError::EmptyField {
                field: "clinic.name"
            }))
        ));
    }

    #[test]
    fn should_load_builtin_content_back_from_its_toml_form() {
        let content = crate::builtin::content();
        let text = toml::to_string(&content).unwrap();
        let parsed: SiteContent = toml::from_str(&text).unwrap();
        assert_eq!(parsed, content);
    }
}
