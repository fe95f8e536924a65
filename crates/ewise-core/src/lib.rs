//! Core EWise library (config, session, API client, list logic).

pub mod api;
pub mod config;
pub mod logging;
pub mod route;
pub mod session;
pub mod users;
