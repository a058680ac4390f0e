//! # clinic-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered site**: `/`, `/services`, `/about`,
//!   `/contact`, rendered with askama templates
//! - Serve a **read-only JSON API** over the service catalog (`/api/services`)
//! - Map query strings into UI state and application results into HTTP
//!   responses (HTML or JSON)
//!
//! ## No-JS rendering
//! - Every page is complete HTML; nothing requires JavaScript.
//! - The mobile menu toggle is a link carrying `menu=open`. Menu links point
//!   at plain routes, so following one leaves the menu collapsed.
//! - The service selector is a list of links carrying `service=<id>`.
//! - Counters are rendered at their settled value and tagged with
//!   `data-counter-*` attributes for a client-side enhancement.
//! - Forms are display-only: no action, and a non-submitting button.
//!
//! ## Dependency rule
//! Depends on `clinic-app` (for the site service) and `clinic-domain` (for
//! the types used in request/response mapping). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
