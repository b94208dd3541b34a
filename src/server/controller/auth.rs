use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            CurrentUserDto, LoginDto, LoginResponseDto, LogoutResponseDto, RefreshResponseDto,
            RegisterDto, RegisterResponseDto,
        },
    },
    server::{
        error::AppError,
        extract::{BearerToken, Json},
        middleware::auth::{AuthGuard, Permission},
        model::{
            token::TokenType,
            user::{LoginParams, RegisterUserParams},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Token scheme reported to clients alongside issued tokens.
static TOKEN_TYPE_BEARER: &str = "Bearer";

/// Register a new account.
///
/// Creates a profesor or trainer account. Only a profesor may register accounts; the
/// role defaults to trainer when omitted.
///
/// # Access Control
/// - `Admin` - Only a profesor can register accounts
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing fields, bad email, unknown role, or short password
/// - `401 Unauthorized` - Missing, invalid, expired, or revoked access token
/// - `403 Forbidden` - Caller is not a profesor
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not a profesor", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn register(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    payload: Result<Json<RegisterDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let profesor = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = RegisterUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: format!("User registered successfully by profesor {}", profesor.name),
            profesor: profesor.name,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// Issues a short-lived access token and a long-lived refresh token.
///
/// # Returns
/// - `200 OK` - Credentials valid
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let session = AuthService::new(&state.db, &state.tokens)
        .login(params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: state.tokens.access_ttl_secs(),
            user: session.user.into_dto(),
        }),
    ))
}

/// Exchange a refresh token for a new access token.
///
/// The refresh token is sent in the `Authorization` header. Access tokens are rejected.
///
/// # Returns
/// - `200 OK` - New access token issued
/// - `401 Unauthorized` - Token missing, invalid, revoked, not a refresh token, or its
///   user no longer exists or was deactivated
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Access token refreshed", body = RefreshResponseDto),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.tokens, &token)
        .verify(Some(TokenType::Refresh))
        .await?;

    let access_token = AuthService::new(&state.db, &state.tokens)
        .refresh(&claims)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RefreshResponseDto {
            message: "Token refreshed successfully".to_string(),
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: state.tokens.access_ttl_secs(),
        }),
    ))
}

/// Revoke the presented token.
///
/// Accepts either an access or a refresh token and revokes only that token.
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Token missing, invalid, or already revoked
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token revoked", body = LogoutResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.tokens, &token)
        .verify(None)
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&claims)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LogoutResponseDto {
            message: "Logout successful".to_string(),
            revoked_token_type: claims.token_type.as_str().to_string(),
            email: claims.sub,
        }),
    ))
}

/// Get the authenticated account.
///
/// # Access Control
/// - `AnyRole` - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Missing or invalid access token
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated account", body = CurrentUserDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Unrecognized role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::AnyRole])
        .await?;

    Ok((
        StatusCode::OK,
        Json(CurrentUserDto {
            user: user.into_dto(),
        }),
    ))
}
