//! Bearer token authentication and role-based authorization.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        token::{Claims, TokenType},
        user::{Role, User},
    },
    service::token::TokenService,
};

/// Access requirement checked against the authenticated user's role.
pub enum Permission {
    /// Profesor only.
    Admin,
    /// Any recognized role.
    AnyRole,
}

/// Verifies the request's bearer token and enforces route permissions.
///
/// Every check happens before the handler body runs, so a denied request has no side
/// effects.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    token: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, token: &'a str) -> Self {
        Self { db, tokens, token }
    }

    /// Verifies the token's signature, expiry, type, and revocation status.
    ///
    /// # Arguments
    /// - `expected` - Required token type, or `None` to accept either type
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    /// - `Err(AuthError::WrongTokenType)` - Token of the other type
    /// - `Err(AuthError::TokenRevoked)` - Token was revoked by a logout
    pub async fn verify(&self, expected: Option<TokenType>) -> Result<Claims, AppError> {
        let claims = self.tokens.decode(self.token)?;

        if let Some(expected) = expected {
            if claims.token_type != expected {
                return Err(AuthError::WrongTokenType {
                    expected,
                    found: claims.token_type,
                }
                .into());
            }
        }

        if RevokedTokenRepository::new(self.db)
            .is_revoked(&claims.jti)
            .await?
        {
            return Err(AuthError::TokenRevoked(claims.jti).into());
        }

        Ok(claims)
    }

    /// Requires a valid access token whose user satisfies every permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError)` - 401 for token or unknown-user failures, 403 for a role that
    ///   is denied or not recognized
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let claims = self.verify(Some(TokenType::Access)).await?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => match user.role {
                    Role::Profesor => {}
                    Role::Trainer => {
                        return Err(AuthError::AccessDenied {
                            email: user.email,
                            reason: "Only a profesor can perform this action".to_string(),
                        }
                        .into());
                    }
                },
                Permission::AnyRole => match user.role {
                    Role::Profesor | Role::Trainer => {}
                },
            }
        }

        Ok(user)
    }
}
