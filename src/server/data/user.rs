//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the database.
//! It handles account creation and the lookups used by authentication, registration, and
//! seeding, converting entity models to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, Role, User},
};

/// Repository providing database operations for user management.
///
/// Works on any SeaORM connection, so it can run against the pool or inside an open
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// New accounts are active and stamped with the current UTC time.
    ///
    /// # Arguments
    /// - `param` - Normalized email, name, password hash, and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already taken (unique index)
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by email.
    ///
    /// # Arguments
    /// - `email` - Normalized (lowercased) email
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError::AuthErr(UnknownRole))` - Stored role is not recognized
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by email holding a specific role.
    ///
    /// Used when assigning creatures, where only trainer accounts qualify.
    ///
    /// # Arguments
    /// - `email` - Normalized (lowercased) email
    /// - `role` - Role the account must hold
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Matching user found
    /// - `Ok(None)` - No user with that email and role
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether an email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - An account with that email exists
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any profesor accounts exist in the database.
    ///
    /// Used at startup to decide whether the default accounts need seeding.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one profesor exists
    /// - `Ok(false)` - No profesor exists (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn profesor_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Profesor.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
