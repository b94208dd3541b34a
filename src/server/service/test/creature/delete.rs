use super::*;

/// Tests deleting a catalog creature.
///
/// Expected: Ok(()) and the row removed
#[tokio::test]
async fn deletes_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, creature, _) = factory::helpers::create_trainer_with_creature(db).await?;

    CreatureService::new(db).delete(creature.id).await?;

    assert_eq!(entity::prelude::Creature::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Assignment::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a creature that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CreatureService::new(db).delete(77).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
