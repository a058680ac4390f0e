//! Application services: use-case implementations.

pub mod site_service;
