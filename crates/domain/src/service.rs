//! Service: a named treatment offering drawn from the fixed catalog.

use serde::{Deserialize, Serialize};

use crate::error::{ClinicError, ValidationError};
use crate::id::ServiceId;

/// A treatment the clinic offers, with its price and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// Price in whole currency units.
    pub price: u32,
    pub benefits: Vec<String>,
    pub duration: String,
    /// Image reference, see [`Placeholder`](crate::image::Placeholder).
    pub image: String,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] when `name` or `duration` is empty.
    pub fn validate(&self) -> Result<(), ClinicError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        if self.duration.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "duration" }.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    short_description: Option<String>,
    long_description: Option<String>,
    price: u32,
    benefits: Vec<String>,
    duration: Option<String>,
    image: Option<String>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(ServiceId::new(id));
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    #[must_use]
    pub fn long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Append one benefit; benefits keep insertion order.
    #[must_use]
    pub fn benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.push(benefit.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] if `name` or `duration` is missing
    /// or empty.
    pub fn build(self) -> Result<Service, ClinicError> {
        let service = Service {
            id: self.id.unwrap_or(ServiceId::new(0)),
            name: self.name.unwrap_or_default(),
            short_description: self.short_description.unwrap_or_default(),
            long_description: self.long_description.unwrap_or_default(),
            price: self.price,
            benefits: self.benefits,
            duration: self.duration.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        };
        service.validate()?;
        Ok(service)
    }
}
