use super::*;
use crate::server::{data::user::UserRepository, model::user::Role, util::password::verify_password};

/// Tests seeding an empty database.
///
/// Expected: Ok(3) with a profesor and two trainers whose passwords verify
#[tokio::test]
async fn seeds_default_accounts_on_empty_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserService::new(db).seed_defaults().await?;

    assert_eq!(created, 3);

    let repo = UserRepository::new(db);
    let oak = repo.find_by_email("profesor@universidad.edu").await?.unwrap();
    assert_eq!(oak.role, Role::Profesor);
    assert!(verify_password("profesor123", &oak.password_hash));

    let ash = repo.find_by_email("ash@pokemon.com").await?.unwrap();
    assert_eq!(ash.role, Role::Trainer);
    assert!(verify_password("ash123", &ash.password_hash));

    Ok(())
}

/// Tests that seeding is skipped once a profesor exists.
///
/// Expected: Ok(0), no accounts added
#[tokio::test]
async fn skips_when_profesor_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_profesor(db).await?;

    let created = UserService::new(db).seed_defaults().await?;

    assert_eq!(created, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that seeding leaves an existing account with a default email alone.
///
/// Expected: Ok(2), the existing trainer keeps its name
#[tokio::test]
async fn skips_taken_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("misty@pokemon.com")
        .name("Misty Waterflower")
        .build()
        .await?;

    let created = UserService::new(db).seed_defaults().await?;

    assert_eq!(created, 2);
    let misty = UserRepository::new(db)
        .find_by_email("misty@pokemon.com")
        .await?
        .unwrap();
    assert_eq!(misty.name, "Misty Waterflower");

    Ok(())
}
