use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::token::TokenType};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// Token failed signature, format, or expiry validation.
    #[error("Token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// A valid token of the wrong kind, e.g. a refresh token on a regular route.
    #[error("Expected {expected} token but received {found} token")]
    WrongTokenType {
        expected: TokenType,
        found: TokenType,
    },

    /// Token id was revoked by a logout.
    #[error("Token {0} has been revoked")]
    TokenRevoked(String),

    /// Token subject no longer matches a stored user.
    #[error("User {0} from token not found")]
    UserNotFound(String),

    /// Unknown email or wrong password at login.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Account exists but was deactivated.
    #[error("Account {0} is inactive")]
    AccountInactive(String),

    /// Refresh attempted for an account deactivated after login.
    #[error("Refresh denied for inactive account {0}")]
    SessionInactive(String),

    /// User's role does not satisfy the route's permission.
    #[error("User {email} denied access: {reason}")]
    AccessDenied { email: String, reason: String },

    /// Stored role string is neither `profesor` nor `trainer`.
    #[error("User {email} has unrecognized role '{role}'")]
    UnknownRole { email: String, role: String },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while client-facing messages stay
/// short.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid, expired, revoked or wrong-type tokens, unknown
///   token subjects, bad credentials and refreshes for deactivated accounts
/// - 403 Forbidden - Login to a deactivated account, insufficient or unrecognized roles
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authorization header must be 'Bearer <token>'".to_string(),
            ),
            Self::InvalidToken(err) => match err.kind() {
                ErrorKind::ExpiredSignature => {
                    (StatusCode::UNAUTHORIZED, "Token has expired".to_string())
                }
                _ => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            },
            Self::WrongTokenType { expected, .. } => (
                StatusCode::UNAUTHORIZED,
                format!("Only {} tokens are accepted here", expected),
            ),
            Self::TokenRevoked(_) => (
                StatusCode::UNAUTHORIZED,
                "Token has been revoked".to_string(),
            ),
            Self::UserNotFound(_) => (StatusCode::UNAUTHORIZED, "User not found".to_string()),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Incorrect email or password".to_string(),
            ),
            Self::SessionInactive(_) => (
                StatusCode::UNAUTHORIZED,
                "User not found or inactive".to_string(),
            ),
            Self::AccountInactive(_) => (
                StatusCode::FORBIDDEN,
                "Your account has been deactivated".to_string(),
            ),
            Self::AccessDenied { reason, .. } => (StatusCode::FORBIDDEN, reason),
            Self::UnknownRole { .. } => (StatusCode::FORBIDDEN, "Invalid user role".to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
