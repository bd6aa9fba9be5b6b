//! Session management for the shell.
//!
//! This module provides `Session`, which holds the authenticated identity
//! (or none) and drives the token-then-profile login protocol against the
//! API client. The shell keys its screens off `Session::is_authenticated`.

pub mod session;

pub use session::Session;
