use super::*;

/// Tests a trainer fetching a creature it holds.
///
/// Expected: Ok(Assignment)
#[tokio::test]
async fn returns_held_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, creature, _) = factory::helpers::create_trainer_with_creature(db).await?;

    let assignment = CreatureService::new(db)
        .get_assigned_by_id(trainer.id, creature.id)
        .await?;

    assert_eq!(assignment.creature.id, creature.id);

    Ok(())
}

/// Tests a trainer fetching an existing creature it does not hold.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_unassigned_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    let creature = factory::create_creature(db).await?;

    let result = CreatureService::new(db)
        .get_assigned_by_id(trainer.id, creature.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a trainer fetching a creature that does not exist.
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

    let trainer = factory::create_trainer(db).await?;

    let result = CreatureService::new(db)
        .get_assigned_by_id(trainer.id, 999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
