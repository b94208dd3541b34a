//! Request guards applied by controllers before any handler logic runs.

pub mod auth;
