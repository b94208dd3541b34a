use super::*;

fn params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        email: email.to_string(),
        name: "Brock".to_string(),
        password: "onix123".to_string(),
        role: Role::Trainer,
    }
}

/// Tests registering a new account.
///
/// Verifies that the account is stored with a hash that verifies against the
/// original password rather than the password itself.
///
/// Expected: Ok(User) and a login with the same password succeeds
#[tokio::test]
async fn registers_account_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let user = service.register(params("brock@pokemon.com")).await?;

    assert_eq!(user.role, Role::Trainer);
    assert_ne!(user.password_hash, "onix123");

    let session = service
        .login(LoginParams {
            email: "brock@pokemon.com".to_string(),
            password: "onix123".to_string(),
        })
        .await?;
    assert_eq!(session.user.id, user.id);

    Ok(())
}

/// Tests registering the same email twice.
///
/// Expected: Err(AppError::Conflict) on the second attempt
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    service.register(params("brock@pokemon.com")).await?;

    let result = service.register(params("brock@pokemon.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        entity::prelude::User::find().all(db).await?.len(),
        1
    );

    Ok(())
}
