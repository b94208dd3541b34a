//! User service for business logic.
//!
//! This module provides the `UserService`, currently responsible for creating the
//! default accounts on a fresh database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
    util::password::hash_password,
};

/// Accounts created on first start: (email, password, name, role).
const DEFAULT_USERS: [(&str, &str, &str, Role); 3] = [
    (
        "profesor@universidad.edu",
        "profesor123",
        "Profesor Oak",
        Role::Profesor,
    ),
    ("ash@pokemon.com", "ash123", "Ash Ketchum", Role::Trainer),
    ("misty@pokemon.com", "misty123", "Misty", Role::Trainer),
];

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the default profesor and trainer accounts when no profesor exists.
    ///
    /// Emails that are already taken are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of accounts created, 0 when a profesor already existed
    /// - `Err(AppError)` - Database or hashing error
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.profesor_exists().await? {
            return Ok(0);
        }

        let mut created = 0;
        for (email, password, name, role) in DEFAULT_USERS {
            if user_repo.email_exists(email).await? {
                continue;
            }

            user_repo
                .create(CreateUserParam {
                    email: email.to_string(),
                    name: name.to_string(),
                    password_hash: hash_password(password)?,
                    role,
                })
                .await?;

            tracing::info!("Seeded default {} account {}", role, email);
            created += 1;
        }

        Ok(created)
    }
}
