use super::*;

/// Tests email existence check for registered and free emails.
///
/// Expected: Ok(true) for the registered email, Ok(false) otherwise
#[tokio::test]
async fn detects_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("brock@pokemon.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("brock@pokemon.com").await?);
    assert!(!repo.email_exists("gary@pokemon.com").await?);

    Ok(())
}
