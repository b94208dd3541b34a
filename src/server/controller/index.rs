use std::collections::BTreeMap;

use axum::{http::StatusCode, response::IntoResponse};
use utoipa::OpenApi;

use crate::{
    model::api::IndexDto,
    server::{extract::Json, router::ApiDoc},
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Routes listed on the welcome document: (signature, description).
const ROUTES: [(&str, &str); 12] = [
    ("POST /auth/login", "Log in and receive access and refresh tokens"),
    ("POST /auth/register", "Register an account (profesor only)"),
    ("POST /auth/refresh", "Exchange a refresh token for a new access token"),
    ("POST /auth/logout", "Revoke the presented token"),
    ("GET /auth/me", "Get the authenticated account"),
    ("GET /api/creature", "List creatures visible to the caller"),
    ("POST /api/creature", "Create a creature (profesor only)"),
    ("GET /api/creature/{id}", "Get a creature"),
    ("PUT /api/creature/{id}", "Update a creature (profesor only)"),
    ("DELETE /api/creature/{id}", "Delete a creature, or release it as a trainer"),
    ("POST /api/creature/{id}/assign", "Assign a creature to a trainer (profesor only)"),
    ("GET /api/openapi.json", "OpenAPI document"),
];

/// Expected JSON type of each creature field.
const CREATURE_FORMAT: [(&str, &str); 7] = [
    ("name", "string"),
    ("type", "string"),
    ("level", "positive integer"),
    ("attack", "non-negative number"),
    ("defense", "non-negative number"),
    ("hp", "positive integer"),
    ("description", "string (optional)"),
];

/// Welcome document listing the available routes.
///
/// # Returns
/// - `200 OK` - Service name, version, routes and the creature JSON format
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Welcome document", body = IndexDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    let to_map = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };

    (
        StatusCode::OK,
        Json(IndexDto {
            message: "Welcome to the Pokédex API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            routes: to_map(&ROUTES),
            creature_format: to_map(&CREATURE_FORMAT),
        }),
    )
}

/// OpenAPI document for every endpoint.
#[utoipa::path(
    get,
    path = "/api/openapi.json",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "OpenAPI 3.1 document", content_type = "application/json")
    ),
)]
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
