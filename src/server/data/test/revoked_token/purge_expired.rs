use super::*;

/// Tests purging rows of tokens that have already expired.
///
/// Expected: Ok(1), the unexpired row is kept
#[tokio::test]
async fn removes_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RevokedTokenRepository::new(db);
    repo.revoke("expired", TokenType::Access, now - Duration::minutes(1))
        .await?;
    repo.revoke("live", TokenType::Refresh, now + Duration::days(1))
        .await?;

    let purged = repo.purge_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(!repo.is_revoked("expired").await?);
    assert!(repo.is_revoked("live").await?);

    Ok(())
}
