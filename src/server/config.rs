//! Environment-based application configuration.

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_FALLBACK_DATABASE_URL: &str = "sqlite://pokedex.db?mode=rwc";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_JWT_SECRET: &str = "pokedex-development-secret-change-me";
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;

pub struct Config {
    /// Primary store. When unset or unreachable the fallback is used.
    pub database_url: Option<String>,
    /// Local store used when the primary cannot be reached.
    pub fallback_database_url: String,

    pub server_addr: String,

    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,

    /// Create the default profesor and trainer accounts when no profesor exists.
    pub seed_default_users: bool,
    /// Add the sample creatures to the catalog, skipping names already present.
    pub seed_sample_creatures: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_algorithm = match optional_var("JWT_ALGORITHM") {
            Some(value) => parse_hmac_algorithm(&value)?,
            None => Algorithm::HS256,
        };

        Ok(Self {
            database_url: optional_var("DATABASE_URL"),
            fallback_database_url: optional_var("DATABASE_FALLBACK_URL")
                .unwrap_or_else(|| DEFAULT_FALLBACK_DATABASE_URL.to_string()),
            server_addr: optional_var("SERVER_ADDR")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            jwt_secret: optional_var("JWT_SECRET_KEY")
                .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            jwt_algorithm,
            access_token_minutes: parsed_var(
                "JWT_ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_MINUTES,
            )?,
            refresh_token_days: parsed_var(
                "JWT_REFRESH_TOKEN_EXPIRE_DAYS",
                DEFAULT_REFRESH_TOKEN_DAYS,
            )?,
            seed_default_users: parsed_var("SEED_DEFAULT_USERS", true)?,
            seed_sample_creatures: parsed_var("SEED_SAMPLE_CREATURES", false)?,
        })
    }

    /// Whether the token signing secret was left at its built-in development value.
    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Reads a variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = optional_var(name) else {
        return Ok(default);
    };

    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })
}

/// Only shared-secret algorithms are supported.
fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value.to_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "JWT_ALGORITHM".to_string(),
            value: value.to_string(),
            reason: "expected HS256, HS384 or HS512".to_string(),
        }),
    }
}
