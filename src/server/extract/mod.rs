//! Request extractors.
//!
//! Thin wrappers over axum's extractors that report rejections using the API's error
//! body instead of axum's plain-text defaults.

pub mod bearer;
pub mod json;
pub mod path;

pub use bearer::BearerToken;
pub use json::Json;
pub use path::Path;
