//! Revoked token repository.
//!
//! Persists the ids of tokens invalidated by logout so every server process sharing the
//! database rejects them until they would have expired anyway.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::token::TokenType;

pub struct RevokedTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RevokedTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a token id as revoked until `expires_at`.
    ///
    /// Revoking an id twice is a no-op; the first row and its expiry are kept.
    ///
    /// # Arguments
    /// - `jti` - Unique id of the token
    /// - `token_type` - Whether an access or refresh token was revoked
    /// - `expires_at` - The token's own expiry; the row may be purged after this
    ///
    /// # Returns
    /// - `Ok(())` - Token id is now revoked
    /// - `Err(DbErr)` - Database error during insert
    pub async fn revoke(
        &self,
        jti: &str,
        token_type: TokenType,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = entity::revoked_token::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            token_type: ActiveValue::Set(token_type.as_str().to_string()),
            expires_at: ActiveValue::Set(expires_at),
        };

        entity::prelude::RevokedToken::insert(model)
            .on_conflict(
                OnConflict::column(entity::revoked_token::Column::Jti)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a token id has been revoked.
    pub async fn is_revoked(&self, jti: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::RevokedToken::find_by_id(jti.to_string())
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Deletes revocation rows whose tokens expired before `cutoff`.
    ///
    /// Callers pass a cutoff that already accounts for the validation leeway, otherwise
    /// a revoked token could be accepted again.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
