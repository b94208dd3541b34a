use super::*;

/// Tests the exact-name lookup used by catalog seeding.
///
/// Expected: Ok(true) for the stored name, Ok(false) for another
#[tokio::test]
async fn matches_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::creature::CreatureFactory::new(db)
        .name("Snorlax")
        .build()
        .await?;

    let repo = CreatureRepository::new(db);

    assert!(repo.name_exists("Snorlax").await?);
    assert!(!repo.name_exists("Munchlax").await?);

    Ok(())
}
