use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Welcome document served at the API root.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct IndexDto {
    pub message: String,
    pub version: String,
    /// Route signature mapped to a short description.
    pub routes: BTreeMap<String, String>,
    /// Creature field mapped to its expected JSON type.
    pub creature_format: BTreeMap<String, String>,
}
