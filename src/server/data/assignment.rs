//! Assignment data repository.
//!
//! Manages the link records between users and catalog creatures. Lookups join the
//! creature so callers always receive complete `Assignment` domain models.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::assignment::{Assignment, CreateAssignmentParams},
};

/// Repository providing database operations for creature assignments.
pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    /// Creates a new AssignmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `AssignmentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a creature to a user.
    ///
    /// # Arguments
    /// - `params` - User id, creature id, and optional nickname
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The created assignment with its creature
    /// - `Err(AppError::Conflict)` - The user already holds this creature (unique index)
    /// - `Err(AppError::DbErr)` - Database error during insert or lookup
    pub async fn create(&self, params: CreateAssignmentParams) -> Result<Assignment, AppError> {
        let entity = entity::assignment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            creature_id: ActiveValue::Set(params.creature_id),
            nickname: ActiveValue::Set(params.nickname),
            assigned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let creature = entity::prelude::Creature::find_by_id(entity.creature_id)
            .one(self.db)
            .await?;

        with_creature((entity, creature))
    }

    /// Finds the assignment linking a user to a creature.
    ///
    /// # Arguments
    /// - `user_id` - Holder of the assignment
    /// - `creature_id` - Assigned creature
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))` - The user holds the creature
    /// - `Ok(None)` - No such assignment
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        creature_id: i32,
    ) -> Result<Option<Assignment>, AppError> {
        let result = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::UserId.eq(user_id))
            .filter(entity::assignment::Column::CreatureId.eq(creature_id))
            .find_also_related(entity::prelude::Creature)
            .one(self.db)
            .await?;

        result.map(with_creature).transpose()
    }

    /// Checks whether a user already holds a creature.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment exists
    /// - `Ok(false)` - No assignment
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, user_id: i32, creature_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::UserId.eq(user_id))
            .filter(entity::assignment::Column::CreatureId.eq(creature_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every assignment held by a user, oldest first.
    ///
    /// # Arguments
    /// - `user_id` - Holder of the assignments
    ///
    /// # Returns
    /// - `Ok(Vec<Assignment>)` - Assignments with their creatures, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Assignment>, AppError> {
        let results = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::UserId.eq(user_id))
            .order_by_asc(entity::assignment::Column::AssignedAt)
            .order_by_asc(entity::assignment::Column::Id)
            .find_also_related(entity::prelude::Creature)
            .all(self.db)
            .await?;

        results.into_iter().map(with_creature).collect()
    }

    /// Removes the link between a user and a creature. The creature itself is kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment removed
    /// - `Ok(false)` - No assignment existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, creature_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::UserId.eq(user_id))
            .filter(entity::assignment::Column::CreatureId.eq(creature_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Combines an assignment row with its joined creature.
fn with_creature(
    (assignment, creature): (entity::assignment::Model, Option<entity::creature::Model>),
) -> Result<Assignment, AppError> {
    let creature = creature.ok_or(InternalError::DanglingAssignment {
        assignment_id: assignment.id,
        creature_id: assignment.creature_id,
    })?;

    Ok(Assignment::from_entity(assignment, creature))
}
