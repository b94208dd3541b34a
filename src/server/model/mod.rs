//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! users, catalog creatures, assignments, and token claims. Domain models are converted
//! from entity models at the repository boundary and transformed to DTOs at the controller
//! boundary.

pub mod assignment;
pub mod creature;
pub mod token;
pub mod user;
