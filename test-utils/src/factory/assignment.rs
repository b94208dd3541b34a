//! Assignment factory for linking trainers to creatures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating assignments with an optional nickname.
pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    creature_id: i32,
    nickname: Option<String>,
}

impl<'a> AssignmentFactory<'a> {
    /// Creates a new AssignmentFactory for the given user and creature.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user receiving the creature
    /// - `creature_id` - ID of the assigned creature
    pub fn new(db: &'a DatabaseConnection, user_id: i32, creature_id: i32) -> Self {
        Self {
            db,
            user_id,
            creature_id,
            nickname: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Builds and inserts the assignment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::assignment::Model)` - Created assignment entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing foreign key)
    pub async fn build(self) -> Result<entity::assignment::Model, DbErr> {
        entity::assignment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            creature_id: ActiveValue::Set(self.creature_id),
            nickname: ActiveValue::Set(self.nickname),
            assigned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assignment without a nickname.
pub async fn create_assignment(
    db: &DatabaseConnection,
    user_id: i32,
    creature_id: i32,
) -> Result<entity::assignment::Model, DbErr> {
    AssignmentFactory::new(db, user_id, creature_id).build().await
}
