use super::*;
use crate::server::data::creature::CreatureRepository;

/// Tests seeding an empty catalog.
///
/// Expected: Ok(30) with Pikachu stored at level 25
#[tokio::test]
async fn seeds_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = CreatureService::new(db).seed_samples().await?;

    assert_eq!(created, 30);
    assert_eq!(entity::prelude::Creature::find().count(db).await?, 30);

    let creatures = CreatureRepository::new(db).get_all().await?;
    let pikachu = creatures.iter().find(|c| c.name == "Pikachu").unwrap();
    assert_eq!(pikachu.level, 25);
    assert_eq!(pikachu.hp, 100);
    assert_eq!(pikachu.kind, "Electric");

    Ok(())
}

/// Tests that creatures already in the catalog are skipped.
///
/// Expected: Ok(29) on top of an existing Pikachu, then Ok(0) on a second run
#[tokio::test]
async fn skips_existing_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::creature::CreatureFactory::new(db)
        .name("Pikachu")
        .level(5)
        .build()
        .await?;

    let service = CreatureService::new(db);
    assert_eq!(service.seed_samples().await?, 29);
    assert_eq!(service.seed_samples().await?, 0);
    assert_eq!(entity::prelude::Creature::find().count(db).await?, 30);

    let creatures = CreatureRepository::new(db).get_all().await?;
    let pikachu: Vec<_> = creatures.iter().filter(|c| c.name == "Pikachu").collect();
    assert_eq!(pikachu.len(), 1);
    assert_eq!(pikachu[0].level, 5);

    Ok(())
}
