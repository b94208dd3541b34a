use super::*;

/// Tests refreshing with a valid refresh token.
///
/// Verifies that the new access token reflects the user's current role rather than
/// the role embedded in the refresh token.
///
/// Expected: Ok(access token) carrying the updated role
#[tokio::test]
async fn issues_access_token_with_current_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = user_with_password(db, "brock@pokemon.com", "onix123", "trainer", true).await?;
    let service = AuthService::new(db, &tokens);
    let session = service
        .login(LoginParams {
            email: "brock@pokemon.com".to_string(),
            password: "onix123".to_string(),
        })
        .await?;

    // Promote after login
    let mut active: entity::user::ActiveModel = stored.into();
    active.role = sea_orm::ActiveValue::Set(Role::Profesor.as_str().to_string());
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let claims = tokens.decode(&session.refresh_token)?;
    let access_token = service.refresh(&claims).await?;

    let refreshed = tokens.decode(&access_token)?;
    assert_eq!(refreshed.token_type, TokenType::Access);
    assert_eq!(refreshed.role, "profesor");

    Ok(())
}

/// Tests refreshing for a subject that no longer exists.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = user_with_password(db, "gone@pokemon.com", "gone123", "trainer", true).await?;
    let service = AuthService::new(db, &tokens);
    let session = service
        .login(LoginParams {
            email: "gone@pokemon.com".to_string(),
            password: "gone123".to_string(),
        })
        .await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let claims = tokens.decode(&session.refresh_token)?;
    let result = service.refresh(&claims).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests refreshing after the account was deactivated.
///
/// Expected: Err(AuthError::SessionInactive)
#[tokio::test]
async fn rejects_deactivated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = user_with_password(db, "misty@pokemon.com", "misty123", "trainer", true).await?;
    let service = AuthService::new(db, &tokens);
    let session = service
        .login(LoginParams {
            email: "misty@pokemon.com".to_string(),
            password: "misty123".to_string(),
        })
        .await?;

    let mut active: entity::user::ActiveModel = stored.into();
    active.active = sea_orm::ActiveValue::Set(false);
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let claims = tokens.decode(&session.refresh_token)?;
    let result = service.refresh(&claims).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionInactive(_)))
    ));

    Ok(())
}
