//! Assignment domain models and parameters.
//!
//! An assignment links a trainer to a catalog creature, optionally with a nickname.

use chrono::{DateTime, Utc};

use crate::{model::creature::AssignmentDto, server::model::creature::Creature};

/// A creature held by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: i32,
    pub user_id: i32,
    pub creature: Creature,
    pub nickname: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    /// Converts the assignment domain model to a DTO for API responses.
    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            creature: self.creature.into_dto(),
            nickname: self.nickname,
            assigned_at: self.assigned_at,
        }
    }

    /// Converts an assignment entity and its joined creature at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The assignment entity from the database
    /// - `creature` - The creature entity the assignment references
    ///
    /// # Returns
    /// - `Assignment` - The assignment carrying its full creature
    pub fn from_entity(entity: entity::assignment::Model, creature: entity::creature::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            creature: Creature::from_entity(creature),
            nickname: entity.nickname,
            assigned_at: entity.assigned_at,
        }
    }
}

/// Parameters for assigning a creature to a user.
#[derive(Debug, Clone)]
pub struct CreateAssignmentParams {
    pub user_id: i32,
    pub creature_id: i32,
    /// Already trimmed; blank nicknames are stored as `None`.
    pub nickname: Option<String>,
}
