//! Core library for gatepass - API client, session state, configuration.
//!
//! The account service exposes a small REST API (login, current user,
//! registration). This crate wraps it in two pieces: [`api::ApiClient`],
//! which owns the transport policy (timeout, retry, bearer token), and
//! [`auth::Session`], which holds the authenticated identity and drives
//! the two-step login protocol. The binary in `main.rs` is a thin shell
//! over those two.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
