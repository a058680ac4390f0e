//! # clinic-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `VisibilitySource`: intersection ratios of a counter's region
//! - Provide the **use-cases** the adapters drive:
//!   - `SiteService`: compose the four page view models from the loaded
//!     content and the caller's UI state
//!   - `CounterHandle`: run a scroll-triggered counter on the tokio runtime
//!
//! ## Dependency rule
//! Depends on `clinic-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod counter_driver;
pub mod pages;
pub mod ports;
pub mod services;
