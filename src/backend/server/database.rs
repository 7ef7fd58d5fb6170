/**
 * Datastore Connection
 *
 * Opens the connection pool and brings the schema up to date. The pool is
 * sqlx's `Any` pool so that the handlers are written once for both
 * backends; the backend is picked from the URL scheme and each one has its
 * own migration directory because the DDL differs (identity columns).
 */

use sqlx::any::AnyPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};
use thiserror::Error;

/// Connection pool handed to every handler
pub type DbPool = sqlx::AnyPool;

static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");

/// Errors raised while opening the datastore
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Supported datastore backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Pick the backend from a connection string
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else {
            None
        }
    }

    fn migrator(self) -> &'static Migrator {
        match self {
            Self::Sqlite => &SQLITE_MIGRATOR,
            Self::Postgres => &POSTGRES_MIGRATOR,
        }
    }
}

/// Connect to the datastore and run migrations
///
/// # Arguments
/// * `database_url` - `sqlite:` or `postgres://` connection string
///
/// # Returns
/// A ready-to-use pool with an up-to-date schema
pub async fn load_database(database_url: &str) -> Result<DbPool, DatabaseError> {
    let backend = Backend::from_url(database_url).ok_or_else(|| {
        let scheme = database_url.split(':').next().unwrap_or_default();
        DatabaseError::UnsupportedUrl(scheme.to_string())
    })?;

    sqlx::any::install_default_drivers();

    tracing::info!("Connecting to {:?} database...", backend);
    let pool = AnyPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(DatabaseError::Connect)?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    backend.migrator().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
