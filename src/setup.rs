use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::CONFIG;
use crate::migration::{Migrator, MigratorTrait};

pub struct SetupResult {
    pub db: DatabaseConnection,
}

pub async fn setup_all() -> anyhow::Result<SetupResult> {
    let mut options = ConnectOptions::new(CONFIG.database_url.as_str());
    options.sqlx_logging(false);

    let db = setup_database(options).await?;
    Ok(SetupResult { db })
}

/// Connects and brings the schema up to date.
pub async fn setup_database(options: ConnectOptions) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    info!("Connected to {:?} database", db.get_database_backend());

    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;
    info!("Migrations applied");

    Ok(db)
}

/// A migrated in-memory SQLite database. A single pooled connection keeps
/// every query on the same memory database.
#[cfg(test)]
pub async fn memory_database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    setup_database(options)
        .await
        .expect("in-memory database setup failed")
}
