//! Creature domain models and parameters.
//!
//! Provides the catalog creature model and the validated parameter types for creating
//! and partially updating creatures. Raw input from the API is checked here so the
//! repository only ever sees values that satisfy the catalog's constraints.

use crate::{
    model::creature::{CreatureDto, CreatureInputDto},
    server::error::AppError,
};

/// Catalog creature.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id: i32,
    pub name: String,
    /// Elemental type, serialized as `type`.
    pub kind: String,
    /// Always positive.
    pub level: i32,
    /// Never negative.
    pub attack: f64,
    /// Never negative.
    pub defense: f64,
    /// Always positive.
    pub hp: i32,
    pub description: Option<String>,
}

impl Creature {
    /// Converts the creature domain model to a DTO for API responses.
    pub fn into_dto(self) -> CreatureDto {
        CreatureDto {
            id: self.id,
            name: self.name,
            kind: self.kind,
            level: self.level,
            attack: self.attack,
            defense: self.defense,
            hp: self.hp,
            description: self.description,
        }
    }

    /// Converts an entity model to a creature domain model at the repository boundary.
    pub fn from_entity(entity: entity::creature::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
            level: entity.level,
            attack: entity.attack,
            defense: entity.defense,
            hp: entity.hp,
            description: entity.description,
        }
    }
}

/// Validated parameters for creating a creature.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCreatureParams {
    pub name: String,
    pub kind: String,
    pub level: i32,
    pub attack: f64,
    pub defense: f64,
    pub hp: i32,
    pub description: Option<String>,
}

impl CreateCreatureParams {
    /// Validates creation input from the API.
    ///
    /// Checks required fields in the order `name`, `type`, `level`, `attack`, `defense`,
    /// `hp` and reports the first one missing, then checks value ranges.
    ///
    /// # Arguments
    /// - `dto` - Raw creature input from the request body
    ///
    /// # Returns
    /// - `Ok(CreateCreatureParams)` - Input is complete and within range
    /// - `Err(AppError::BadRequest)` - A field is missing, blank, or out of range
    pub fn from_dto(dto: CreatureInputDto) -> Result<Self, AppError> {
        let name = required_text("name", dto.name)?;
        let kind = required_text("type", dto.kind)?;
        let level = required("level", dto.level)?;
        let attack = required("attack", dto.attack)?;
        let defense = required("defense", dto.defense)?;
        let hp = required("hp", dto.hp)?;

        Ok(Self {
            name,
            kind,
            level: positive_int("level", level)?,
            attack: non_negative("attack", attack)?,
            defense: non_negative("defense", defense)?,
            hp: positive_int("hp", hp)?,
            description: dto.description,
        })
    }
}

/// Validated parameters for a partial creature update.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCreatureParams {
    pub id: i32,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub level: Option<i32>,
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub hp: Option<i32>,
    pub description: Option<String>,
}

impl UpdateCreatureParams {
    /// Validates update input from the API.
    ///
    /// Only fields present in the request are checked; they follow the same rules as
    /// on creation.
    ///
    /// # Arguments
    /// - `id` - Creature being updated
    /// - `dto` - Raw creature input from the request body
    ///
    /// # Returns
    /// - `Ok(UpdateCreatureParams)` - All provided fields are valid
    /// - `Err(AppError::BadRequest)` - A provided field is blank or out of range
    pub fn from_dto(id: i32, dto: CreatureInputDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.map(|v| required_text("name", Some(v))).transpose()?,
            kind: dto.kind.map(|v| required_text("type", Some(v))).transpose()?,
            level: dto.level.map(|v| positive_int("level", v)).transpose()?,
            attack: dto.attack.map(|v| non_negative("attack", v)).transpose()?,
            defense: dto.defense.map(|v| non_negative("defense", v)).transpose()?,
            hp: dto.hp.map(|v| positive_int("hp", v)).transpose()?,
            description: dto.description,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Field '{}' is required", field)))
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    let value = required(field, value)?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Field '{}' cannot be empty",
            field
        )));
    }

    Ok(trimmed.to_string())
}

fn positive_int(field: &str, value: i64) -> Result<i32, AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "Field '{}' must be a positive integer",
            field
        )));
    }

    i32::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("Field '{}' is too large", field)))
}

fn non_negative(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!(
            "Field '{}' must be a non-negative number",
            field
        )));
    }

    Ok(value)
}
