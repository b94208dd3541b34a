use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Account registration request. Missing fields are reported as validation errors.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
pub struct RegisterDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    /// Defaults to `trainer` when omitted.
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RegisterResponseDto {
    pub message: String,
    /// Name of the profesor who created the account.
    pub profesor: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RefreshResponseDto {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LogoutResponseDto {
    pub message: String,
    /// `access` or `refresh`, whichever was presented.
    pub revoked_token_type: String,
    pub email: String,
}

/// The authenticated account.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CurrentUserDto {
    pub user: UserDto,
}
