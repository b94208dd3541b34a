use super::*;

/// Tests updating an existing creature.
///
/// Expected: Ok(Creature) with the new values
#[tokio::test]
async fn updates_existing_creature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CreatureService::new(db);
    let created = service
        .create(CreateCreatureParams {
            name: "Eevee".to_string(),
            kind: "Normal".to_string(),
            level: 10,
            attack: 55.0,
            defense: 50.0,
            hp: 55,
            description: None,
        })
        .await?;

    let updated = service
        .update(UpdateCreatureParams {
            id: created.id,
            kind: Some("Fire".to_string()),
            name: Some("Flareon".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Flareon");
    assert_eq!(updated.kind, "Fire");
    assert_eq!(updated.level, 10);

    Ok(())
}

/// Tests updating a creature that does not exist.
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

    let result = CreatureService::new(db)
        .update(UpdateCreatureParams {
            id: 12,
            level: Some(3),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
