//! Creature factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test creatures with customizable fields.
pub struct CreatureFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: String,
    level: i32,
    attack: f64,
    defense: f64,
    hp: i32,
    description: Option<String>,
}

impl<'a> CreatureFactory<'a> {
    /// Creates a new CreatureFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Creature {id}"`
    /// - kind: `"Normal"`
    /// - level: `5`, attack `10.0`, defense `10.0`, hp `20`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Creature {}", id),
            kind: "Normal".to_string(),
            level: 5,
            attack: 10.0,
            defense: 10.0,
            hp: 20,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn stats(mut self, attack: f64, defense: f64) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the creature entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::creature::Model)` - Created creature entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::creature::Model, DbErr> {
        entity::creature::ActiveModel {
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            level: ActiveValue::Set(self.level),
            attack: ActiveValue::Set(self.attack),
            defense: ActiveValue::Set(self.defense),
            hp: ActiveValue::Set(self.hp),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a creature with default values.
pub async fn create_creature(db: &DatabaseConnection) -> Result<entity::creature::Model, DbErr> {
    CreatureFactory::new(db).build().await
}
