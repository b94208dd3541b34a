//! SeaORM entity models for the pokedex schema.

pub mod prelude;

pub mod assignment;
pub mod creature;
pub mod revoked_token;
pub mod user;
