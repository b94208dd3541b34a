//! Account registration and token lifecycle.
//!
//! This module provides the `AuthService`, which owns the credential flows of the API:
//! registering accounts, logging in, refreshing access tokens, and revoking tokens at
//! logout. Token verification and role checks happen earlier, in `AuthGuard`.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        token::Claims,
        user::{CreateUserParam, LoginParams, RegisterUserParams, User},
    },
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

/// Tokens issued by a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Service providing authentication business logic.
///
/// Holds references to the database connection and the token service.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign new tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account.
    ///
    /// Rejects emails that are already registered, then stores the account with a
    /// salted argon2 hash of the password.
    ///
    /// # Arguments
    /// - `params` - Validated registration input
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(
                "This email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: params.email,
                name: params.name,
                password_hash,
                role: params.role,
            })
            .await?;

        tracing::info!("Registered {} account {}", user.role, user.email);

        Ok(user)
    }

    /// Checks credentials and issues an access and a refresh token.
    ///
    /// # Arguments
    /// - `params` - Normalized email and password
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - Credentials valid and account active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Account deactivated
    /// - `Err(AppError::InternalErr)` - Token signing failed
    pub async fn login(&self, params: LoginParams) -> Result<LoginSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountInactive(user.email).into());
        }

        let access_token = self.tokens.issue_access_token(&user)?;
        let refresh_token = self.tokens.issue_refresh_token(&user)?;

        Ok(LoginSession {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Issues a new access token for the subject of a verified refresh token.
    ///
    /// The user is re-read so the new token carries the current role and name.
    ///
    /// # Arguments
    /// - `claims` - Claims of a verified, unrevoked refresh token
    ///
    /// # Returns
    /// - `Ok(String)` - New access token
    /// - `Err(AuthError::UserNotFound)` - Account no longer exists
    /// - `Err(AuthError::SessionInactive)` - Account deactivated since login
    pub async fn refresh(&self, claims: &Claims) -> Result<String, AppError> {
        let user = self
            .current_user(claims)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(claims.sub.clone()))?;

        if !user.active {
            return Err(AuthError::SessionInactive(user.email).into());
        }

        Ok(self.tokens.issue_access_token(&user)?)
    }

    /// Revokes the presented token.
    ///
    /// Expired revocation rows are purged in the same transaction. The paired token of
    /// the same login stays valid.
    ///
    /// # Arguments
    /// - `claims` - Claims of the verified token being revoked
    ///
    /// # Returns
    /// - `Ok(())` - Token id recorded as revoked
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let revoked_repo = RevokedTokenRepository::new(&txn);

        let purged = revoked_repo
            .purge_expired(TokenService::rejected_before(Utc::now()))
            .await?;
        revoked_repo
            .revoke(&claims.jti, claims.token_type, claims.expires_at())
            .await?;

        txn.commit().await?;

        if purged > 0 {
            tracing::debug!("Purged {} expired revoked tokens", purged);
        }

        Ok(())
    }

    /// Resolves a token's subject to the stored account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Subject exists
    /// - `Ok(None)` - Subject no longer exists
    pub async fn current_user(&self, claims: &Claims) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_email(&claims.sub).await
    }
}
