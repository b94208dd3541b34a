use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields are overwritten and the rest keep their
/// stored values.
///
/// Expected: Ok(Some(Creature)) with level changed and name untouched
#[tokio::test]
async fn overwrites_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CreatureRepository::new(db);
    let created = repo.create(bulbasaur()).await?;

    let updated = repo
        .update(UpdateCreatureParams {
            id: created.id,
            level: Some(16),
            attack: Some(62.0),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.level, 16);
    assert_eq!(updated.attack, 62.0);
    assert_eq!(updated.name, "Bulbasaur");
    assert_eq!(updated.defense, 49.0);
    assert_eq!(updated.description, created.description);

    Ok(())
}

/// Tests updating a creature that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_creature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Creature)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CreatureRepository::new(db);
    let result = repo
        .update(UpdateCreatureParams {
            id: 999,
            name: Some("Ivysaur".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
