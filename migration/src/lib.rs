pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_creature_table;
mod m20251020_000003_create_assignment_table;
mod m20251021_000004_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_creature_table::Migration),
            Box::new(m20251020_000003_create_assignment_table::Migration),
            Box::new(m20251021_000004_create_revoked_token_table::Migration),
        ]
    }
}
