//! Backend for the MGNREGA district dashboard.
//!
//! Proxies the data.gov.in district-records resource and serves the
//! dashboard page plus the JSON endpoints it consumes.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
