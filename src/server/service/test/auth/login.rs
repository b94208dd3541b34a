use super::*;

fn login(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with valid credentials.
///
/// Expected: Ok(LoginSession) with an access and a refresh token for the user
#[tokio::test]
async fn issues_both_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    user_with_password(db, "ash@pokemon.com", "ash123", "trainer", true).await?;

    let session = AuthService::new(db, &tokens)
        .login(login("ash@pokemon.com", "ash123"))
        .await?;

    let access = tokens.decode(&session.access_token)?;
    let refresh = tokens.decode(&session.refresh_token)?;

    assert_eq!(access.token_type, TokenType::Access);
    assert_eq!(refresh.token_type, TokenType::Refresh);
    assert_eq!(access.sub, "ash@pokemon.com");
    assert_eq!(access.role, "trainer");
    assert_ne!(access.jti, refresh.jti);

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    user_with_password(db, "ash@pokemon.com", "ash123", "trainer", true).await?;
    let service = AuthService::new(db, &tokens);

    let wrong_password = service.login(login("ash@pokemon.com", "gary123")).await;
    let unknown_email = service.login(login("gary@pokemon.com", "ash123")).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in to a deactivated account.
///
/// Expected: Err(AuthError::AccountInactive)
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    user_with_password(db, "misty@pokemon.com", "misty123", "trainer", false).await?;

    let result = AuthService::new(db, &tokens)
        .login(login("misty@pokemon.com", "misty123"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}
