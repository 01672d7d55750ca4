use crate::TestDb;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

const SQLITE_SCHEMA: &str = include_str!("../../lectern-server/migrations/sqlite/2025-06-01-120000_create_tables/up.sql");

/// A sqlite database file inside a temporary directory that is removed on drop.
pub struct SqliteDb {
    // Keeps the directory alive as long as the db is used
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("test-sqlite-db")?;
        let uri = temp_dir
            .path()
            .to_path_buf()
            .join("db.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();
        let uri = format!("sqlite://{uri}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

/// In-memory sqlite connection with the application schema applied.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    db.execute_unprepared(SQLITE_SCHEMA).await?;
    Ok(db)
}
