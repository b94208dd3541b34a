use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Creature fields accepted on create and update.
///
/// Every field is optional at the wire level. Creation requires all fields except
/// `description`; updates overwrite only the fields present.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreatureInputDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub level: Option<i64>,
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub hp: Option<i64>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatureDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub level: i32,
    pub attack: f64,
    pub defense: f64,
    pub hp: i32,
    pub description: Option<String>,
}

/// A creature as held by a trainer.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub creature: CreatureDto,
    pub nickname: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

/// Catalog listing, shaped by the caller's role.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum CreatureListDto {
    Profesor {
        total: usize,
        creatures: Vec<CreatureDto>,
    },
    Trainer {
        trainer: String,
        total: usize,
        assignments: Vec<AssignmentDto>,
    },
}

/// Single catalog entry, shaped by the caller's role.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum CreatureDetailDto {
    Profesor { creature: CreatureDto },
    Trainer { assignment: AssignmentDto },
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatureResponseDto {
    pub message: String,
    pub creature: CreatureDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteCreatureDto {
    pub message: String,
    /// Name of the released creature when a trainer released it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
pub struct AssignCreatureDto {
    pub trainer_email: Option<String>,
    pub nickname: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AssignmentCreatedDto {
    pub message: String,
    pub profesor: String,
    pub trainer: String,
    pub creature: String,
    pub nickname: Option<String>,
    pub assignment: AssignmentDto,
}
