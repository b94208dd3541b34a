use super::*;

/// Tests a trainer releasing a creature it holds.
///
/// Expected: Ok(name), assignment removed, catalog row kept
#[tokio::test]
async fn releases_held_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db).await?;
    let creature = factory::creature::CreatureFactory::new(db)
        .name("Psyduck")
        .build()
        .await?;
    factory::create_assignment(db, trainer.id, creature.id).await?;

    let released = CreatureService::new(db)
        .release(trainer.id, creature.id)
        .await?;

    assert_eq!(released, "Psyduck");
    assert_eq!(entity::prelude::Assignment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Creature::find().count(db).await?, 1);

    Ok(())
}

/// Tests a trainer releasing a creature held by someone else.
///
/// Expected: Err(AppError::Forbidden), other trainer's assignment untouched
#[tokio::test]
async fn forbids_releasing_unheld_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, creature, _) = factory::helpers::create_trainer_with_creature(db).await?;
    let other = factory::create_trainer(db).await?;

    let result = CreatureService::new(db).release(other.id, creature.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(entity::prelude::Assignment::find().count(db).await?, 1);

    Ok(())
}
