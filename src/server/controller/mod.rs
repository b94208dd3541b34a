//! HTTP request handlers.
//!
//! Controllers extract the request, run the `AuthGuard`, convert DTOs into validated
//! parameters, call a service, and convert the resulting domain models back into DTOs.

pub mod auth;
pub mod creature;
pub mod index;

#[cfg(test)]
mod test;
