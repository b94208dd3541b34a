use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository stores the account as active with the requested
/// role and returns it as a domain model.
///
/// Expected: Ok(User) with active=true
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(param("brock@pokemon.com", Role::Trainer))
        .await?;

    assert_eq!(user.email, "brock@pokemon.com");
    assert_eq!(user.role, Role::Trainer);
    assert!(user.active);

    Ok(())
}

/// Tests duplicate email insertion.
///
/// Verifies that the unique index on email surfaces as a conflict rather than a
/// generic database error.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("brock@pokemon.com", Role::Trainer))
        .await?;

    let result = repo
        .create(param("brock@pokemon.com", Role::Profesor))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
