//! REST API client module for the gatepass account service.
//!
//! This module provides the `ApiClient` for communicating with the
//! account API: credential exchange, current-user lookup, and
//! registration.
//!
//! The API uses bearer token authentication obtained through the login
//! endpoint.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
