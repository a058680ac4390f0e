//! # clinic-domain
//!
//! Pure domain model for the Osteopraktik clinic website.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, image references
//! - Define **Services** (treatment offerings) and the fixed **Catalog** they live in
//! - Define the remaining **content tables** (team, values, working hours, …)
//!   and the builtin clinic copy
//! - Define the **UI state machines**: navigation menu, service selector,
//!   scroll-triggered counter
//! - Describe the display-only contact and booking **forms**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod image;

pub mod builtin;
pub mod catalog;
pub mod content;
pub mod counter;
pub mod form;
pub mod menu;
pub mod selector;
pub mod service;
