//! Domain models for the account service.

pub mod user;

pub use user::User;
