//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. They validate rules that
//! need the database, orchestrate repository calls, and open transactions around
//! multi-step writes.

pub mod auth;
pub mod creature;
pub mod token;
pub mod user;
