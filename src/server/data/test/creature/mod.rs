use crate::server::{
    data::creature::CreatureRepository,
    model::creature::{CreateCreatureParams, UpdateCreatureParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod name_exists;
mod update;

fn bulbasaur() -> CreateCreatureParams {
    CreateCreatureParams {
        name: "Bulbasaur".to_string(),
        kind: "Grass".to_string(),
        level: 5,
        attack: 49.0,
        defense: 49.0,
        hp: 45,
        description: Some("A strange seed was planted on its back at birth.".to_string()),
    }
}
