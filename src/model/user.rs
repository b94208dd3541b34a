use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account. Never carries the password hash.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Either `profesor` or `trainer`.
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
