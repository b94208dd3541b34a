use super::*;

/// Tests either token type is accepted when no type is required.
///
/// Expected: Ok(Claims) for both tokens
#[tokio::test]
async fn accepts_any_type_when_unspecified() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = stored_user(db, "trainer").await?;
    let access = tokens.issue_access_token(&user)?;
    let refresh = tokens.issue_refresh_token(&user)?;

    let access_claims = AuthGuard::new(db, &tokens, &access).verify(None).await?;
    let refresh_claims = AuthGuard::new(db, &tokens, &refresh).verify(None).await?;

    assert_eq!(access_claims.token_type, TokenType::Access);
    assert_eq!(refresh_claims.token_type, TokenType::Refresh);

    Ok(())
}

/// Tests an access token is rejected where a refresh token is required.
///
/// Expected: Err(AuthError::WrongTokenType)
#[tokio::test]
async fn rejects_access_token_for_refresh() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = stored_user(db, "trainer").await?;
    let access = tokens.issue_access_token(&user)?;

    let result = AuthGuard::new(db, &tokens, &access)
        .verify(Some(TokenType::Refresh))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongTokenType { .. }))
    ));

    Ok(())
}

/// Tests a revoked token is rejected.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = stored_user(db, "profesor").await?;
    let token = tokens.issue_access_token(&user)?;
    let claims = tokens.decode(&token)?;

    RevokedTokenRepository::new(db)
        .revoke(&claims.jti, claims.token_type, claims.expires_at())
        .await?;

    let result = AuthGuard::new(db, &tokens, &token).verify(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked(_)))
    ));

    Ok(())
}

/// Tests an expired token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let expired_tokens = TokenService::new(
        b"guard-test-secret",
        Algorithm::HS256,
        Duration::hours(-1),
        Duration::days(7),
    );

    let user = stored_user(db, "profesor").await?;
    let token = expired_tokens.issue_access_token(&user)?;

    let result = AuthGuard::new(db, &tokens, &token).verify(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
