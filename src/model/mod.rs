//! Request and response DTOs shared by the HTTP layer.
//!
//! These types define the JSON contract of the API. The server converts them to and
//! from its own domain models at the controller boundary.

pub mod api;
pub mod auth;
pub mod creature;
pub mod user;
