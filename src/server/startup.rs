use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{creature::CreatureService, user::UserService},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the configured database and runs pending migrations.
///
/// Tries `DATABASE_URL` first. When it is unset or the connection fails, a warning is
/// logged and the local fallback store is used instead. Migrations run against whichever
/// store was selected.
///
/// # Arguments
/// - `config` - Application configuration containing the database URLs
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Fallback connection or migrations failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let db = match &config.database_url {
        Some(url) => match connect(url).await {
            Ok(db) => {
                tracing::info!("Connected to primary database");
                db
            }
            Err(err) => {
                tracing::warn!(
                    "Primary database unavailable ({}), falling back to {}",
                    err,
                    config.fallback_database_url
                );
                connect(&config.fallback_database_url).await?
            }
        },
        None => {
            tracing::info!(
                "DATABASE_URL not set, using {}",
                config.fallback_database_url
            );
            connect(&config.fallback_database_url).await?
        }
    };

    Migrator::up(&db, None).await?;

    Ok(db)
}

async fn connect(url: &str) -> Result<DatabaseConnection, sea_orm::DbErr> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Database::connect(opt).await
}

/// Seeds the default accounts when the database has no profesor.
///
/// Does nothing when `SEED_DEFAULT_USERS` is disabled.
///
/// # Arguments
/// - `db` - Connected and migrated database
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` - Seeding finished or was not needed
/// - `Err(AppError)` - Database or hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_default_users {
        return Ok(());
    }

    let created = UserService::new(db).seed_defaults().await?;

    if created > 0 {
        tracing::info!(
            "No profesor found, created {} default accounts. Change their passwords.",
            created
        );
    }

    Ok(())
}

/// Adds the sample creatures to the catalog when `SEED_SAMPLE_CREATURES` is enabled.
pub async fn seed_sample_creatures(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    if !config.seed_sample_creatures {
        return Ok(());
    }

    let created = CreatureService::new(db).seed_samples().await?;
    tracing::info!("Seeded {} sample creatures", created);

    Ok(())
}
