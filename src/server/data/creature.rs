//! Creature data repository for catalog operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::creature::{CreateCreatureParams, Creature, UpdateCreatureParams};

pub struct CreatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CreatureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new creature into the catalog
    pub async fn create(&self, params: CreateCreatureParams) -> Result<Creature, DbErr> {
        let entity = entity::creature::ActiveModel {
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind),
            level: ActiveValue::Set(params.level),
            attack: ActiveValue::Set(params.attack),
            defense: ActiveValue::Set(params.defense),
            hp: ActiveValue::Set(params.hp),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Creature::from_entity(entity))
    }

    /// Gets the full catalog ordered by id
    pub async fn get_all(&self) -> Result<Vec<Creature>, DbErr> {
        let entities = entity::prelude::Creature::find()
            .order_by_asc(entity::creature::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Creature::from_entity).collect())
    }

    /// Checks whether a creature with exactly this name is in the catalog
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Creature::find()
            .filter(entity::creature::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a creature by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Creature>, DbErr> {
        let entity = entity::prelude::Creature::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Creature::from_entity))
    }

    /// Overwrites the provided fields of a creature, leaving the rest untouched.
    /// Returns None if the creature doesn't exist
    pub async fn update(&self, params: UpdateCreatureParams) -> Result<Option<Creature>, DbErr> {
        let Some(entity) = entity::prelude::Creature::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::creature::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(kind) = params.kind {
            active.kind = ActiveValue::Set(kind);
        }
        if let Some(level) = params.level {
            active.level = ActiveValue::Set(level);
        }
        if let Some(attack) = params.attack {
            active.attack = ActiveValue::Set(attack);
        }
        if let Some(defense) = params.defense {
            active.defense = ActiveValue::Set(defense);
        }
        if let Some(hp) = params.hp {
            active.hp = ActiveValue::Set(hp);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Creature::from_entity(updated)))
    }

    /// Deletes a creature along with every assignment that references it.
    /// Returns false if the creature doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::CreatureId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Creature::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
