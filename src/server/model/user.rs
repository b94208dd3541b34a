//! User domain models and parameters.
//!
//! Provides the account model with its closed role set, plus the parameter type used
//! to create accounts during registration and seeding.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::{LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        util::validate::{is_valid_email, non_blank, normalize_email, MIN_PASSWORD_LEN},
    },
};

/// Account role. Controls which catalog operations a user may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrator with full catalog write access.
    Profesor,
    /// Restricted to viewing and releasing its own assignments.
    Trainer,
}

impl Role {
    /// Stored and serialized form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Profesor => "profesor",
            Role::Trainer => "trainer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parses a role case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profesor" => Ok(Role::Profesor),
            "trainer" => Ok(Role::Trainer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Stored user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased login email, unique across accounts.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
    /// Inactive accounts cannot log in or refresh tokens.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The user without its password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            active: self.active,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::AuthErr(UnknownRole))` - Stored role is neither `profesor` nor
    ///   `trainer`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|UnknownRole(role)| AuthError::UnknownRole {
                email: entity.email.clone(),
                role,
            })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            role,
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a user account.
///
/// Fields are expected to be validated and normalized already.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Lowercased email.
    pub email: String,
    /// Trimmed display name.
    pub name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    /// Trimmed and lowercased.
    pub email: String,
    /// Trimmed.
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl RegisterUserParams {
    /// Validates registration input from the API.
    ///
    /// Checks, in order: email, name and password present; email format; role known
    /// (defaults to trainer when omitted); password length. Email uniqueness is left to
    /// the service.
    ///
    /// # Arguments
    /// - `dto` - Raw registration request
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Input passed every check
    /// - `Err(AppError::BadRequest)` - First failed check
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let email = non_blank(dto.email).map(|e| normalize_email(&e));
        let name = non_blank(dto.name);
        let password = dto.password.filter(|p| !p.is_empty());

        let (Some(email), Some(name), Some(password)) = (email, name, password) else {
            return Err(AppError::BadRequest(
                "Email, name and password are required".to_string(),
            ));
        };

        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        let role = match dto.role {
            Some(role) => role
                .trim()
                .parse::<Role>()
                .map_err(|_| AppError::BadRequest("Role must be 'profesor' or 'trainer'".to_string()))?,
            None => Role::Trainer,
        };

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(Self {
            email,
            name,
            password,
            role,
        })
    }
}

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginParams {
    /// Trimmed and lowercased.
    pub email: String,
    pub password: String,
}

impl LoginParams {
    /// Validates login input from the API.
    ///
    /// # Returns
    /// - `Ok(LoginParams)` - Both fields present
    /// - `Err(AppError::BadRequest)` - Email or password missing
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let email = non_blank(dto.email).map(|e| normalize_email(&e));
        let password = dto.password.filter(|p| !p.is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            )),
        }
    }
}
