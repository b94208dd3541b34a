//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a trainer holding one assigned creature.
///
/// Creates, with default values:
/// 1. Trainer user
/// 2. Creature
/// 3. Assignment linking the two
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((trainer, creature, assignment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trainer_with_creature(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::creature::Model,
        entity::assignment::Model,
    ),
    DbErr,
> {
    let trainer = crate::factory::user::create_trainer(db).await?;
    let creature = crate::factory::creature::create_creature(db).await?;
    let assignment =
        crate::factory::assignment::create_assignment(db, trainer.id, creature.id).await?;

    Ok((trainer, creature, assignment))
}
