use super::*;

/// Tests fetching an existing creature and a missing id.
///
/// Expected: Ok(Some) for the stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_creature_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_creature(db).await?;

    let repo = CreatureRepository::new(db);

    let found = repo.find_by_id(stored.id).await?;
    assert_eq!(found.map(|c| c.name), Some(stored.name));

    assert!(repo.find_by_id(stored.id + 100).await?.is_none());

    Ok(())
}
