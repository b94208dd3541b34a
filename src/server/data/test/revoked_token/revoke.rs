use super::*;

/// Tests revoking a token id.
///
/// Expected: Ok(()) and the id reported as revoked
#[tokio::test]
async fn records_revoked_jti() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    repo.revoke("jti-1", TokenType::Access, Utc::now() + Duration::minutes(30))
        .await?;

    let stored = entity::prelude::RevokedToken::find_by_id("jti-1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.token_type, "access");

    Ok(())
}

/// Tests revoking the same id twice.
///
/// Expected: Ok(()) both times with a single stored row
#[tokio::test]
async fn revoking_twice_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    let expires_at = Utc::now() + Duration::days(7);
    repo.revoke("jti-1", TokenType::Refresh, expires_at).await?;
    repo.revoke("jti-1", TokenType::Refresh, expires_at).await?;

    assert_eq!(entity::prelude::RevokedToken::find().count(db).await?, 1);

    Ok(())
}

/// Tests revoking an id whose row was already written by another request.
///
/// Expected: Ok(()) and the existing row left unchanged
#[tokio::test]
async fn existing_row_is_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_expiry = Utc::now() + Duration::minutes(30);
    entity::revoked_token::ActiveModel {
        jti: sea_orm::ActiveValue::Set("jti-1".to_string()),
        token_type: sea_orm::ActiveValue::Set("access".to_string()),
        expires_at: sea_orm::ActiveValue::Set(first_expiry),
    }
    .insert(db)
    .await?;

    RevokedTokenRepository::new(db)
        .revoke("jti-1", TokenType::Refresh, Utc::now() + Duration::days(7))
        .await?;

    let stored = entity::prelude::RevokedToken::find_by_id("jti-1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.token_type, "access");
    assert_eq!(stored.expires_at.timestamp(), first_expiry.timestamp());

    Ok(())
}
