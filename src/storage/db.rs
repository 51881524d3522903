use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema, SqlxSqliteConnector};

use crate::entities::memo;

/// Local storage manager for memos
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the SQLite database file at `path`
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }

        // Typed options, so '?' or '#' in the path stay part of the file name
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        Self::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::connect(SqliteConnectOptions::from_str("sqlite::memory:")?).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        // One connection: the store has a single writer, and an in-memory
        // database only lives as long as its connection.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options.disable_statement_logging())
            .await?;

        let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        log::info!("Storage: database ready");

        Ok(storage)
    }

    /// Create the memos table unless it already exists
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create = schema.create_table_from_entity(memo::Entity);
        create.if_not_exists();
        self.conn.execute(backend.build(&create)).await?;

        Ok(())
    }

    /// Release the connection at window close
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
