//! Plain SQL migrations.
//!
//! Migrations are `*.sql` files applied in lexicographic filename order. Each
//! applied file is recorded in `schema_migrations`; the record is written only
//! after the file's batch succeeded, so a failed file is retried on the next run.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Schema, Set,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::entities::schema_migration;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("migration {file} failed: {source}")]
    Failed {
        file: String,
        #[source]
        source: DbErr,
    },

    #[error("seed file {} failed: {}", .path.display(), .source)]
    Seed {
        path: PathBuf,
        #[source]
        source: DbErr,
    },

    #[error(transparent)]
    Database(#[from] DbErr),
}

/// A migration file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    pub filename: String,
    pub path: PathBuf,
}

/// Applied and pending filenames, both in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStatus {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

pub struct SqlMigrator {
    db: DatabaseConnection,
    dir: PathBuf,
}

impl SqlMigrator {
    pub fn new(db: DatabaseConnection, dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            dir: dir.into(),
        }
    }

    /// Creates `schema_migrations` if it does not exist yet.
    pub async fn ensure_bookkeeping_table(&self) -> Result<(), MigrationError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(schema_migration::Entity);
        stmt.if_not_exists();
        self.db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// Every `*.sql` file in the directory, sorted by filename.
    pub fn discover(&self) -> Result<Vec<MigrationFile>, MigrationError> {
        let io_err = |source| MigrationError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            let is_sql = path.extension().map_or(false, |ext| ext == "sql");
            if !is_sql || !path.is_file() {
                continue;
            }
            if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
                files.push(MigrationFile {
                    filename: filename.to_string(),
                    path: path.clone(),
                });
            }
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }

    async fn applied(&self) -> Result<Vec<String>, MigrationError> {
        let rows = schema_migration::Entity::find()
            .order_by_asc(schema_migration::Column::Filename)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.filename).collect())
    }

    /// Discovered files not yet recorded as applied.
    pub async fn pending(&self) -> Result<Vec<MigrationFile>, MigrationError> {
        let applied: BTreeSet<String> = self.applied().await?.into_iter().collect();
        Ok(self
            .discover()?
            .into_iter()
            .filter(|file| !applied.contains(&file.filename))
            .collect())
    }

    pub async fn status(&self) -> Result<MigrationStatus, MigrationError> {
        self.ensure_bookkeeping_table().await?;
        Ok(MigrationStatus {
            applied: self.applied().await?,
            pending: self
                .pending()
                .await?
                .into_iter()
                .map(|file| file.filename)
                .collect(),
        })
    }

    /// Applies every pending file in order and returns the applied filenames.
    /// Stops at the first failure.
    pub async fn run(&self) -> Result<Vec<String>, MigrationError> {
        self.ensure_bookkeeping_table().await?;

        let pending = self.pending().await?;
        if pending.is_empty() {
            info!(dir = %self.dir.display(), "No pending migrations");
            return Ok(Vec::new());
        }

        let mut applied = Vec::with_capacity(pending.len());
        for file in pending {
            self.apply(&file).await?;
            applied.push(file.filename);
        }

        info!(count = applied.len(), "Migrations applied");
        Ok(applied)
    }

    async fn apply(&self, file: &MigrationFile) -> Result<(), MigrationError> {
        let sql = fs::read_to_string(&file.path).map_err(|source| MigrationError::Io {
            path: file.path.clone(),
            source,
        })?;

        if sql.trim().is_empty() {
            debug!(file = %file.filename, "Empty migration file");
        } else {
            self.db.execute_unprepared(&sql).await.map_err(|source| {
                error!(file = %file.filename, error = %source, "Migration failed");
                MigrationError::Failed {
                    file: file.filename.clone(),
                    source,
                }
            })?;
        }

        schema_migration::ActiveModel {
            id: NotSet,
            filename: Set(file.filename.clone()),
            applied_at: Set(Utc::now().naive_utc()),
        }
        .insert(&self.db)
        .await?;

        info!(file = %file.filename, "Applied migration");
        Ok(())
    }
}

/// Executes a SQL dump as one batch. No bookkeeping: loading twice runs it twice.
pub struct SeedLoader {
    db: DatabaseConnection,
}

impl SeedLoader {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn load(&self, path: &Path) -> Result<(), MigrationError> {
        let sql = fs::read_to_string(path).map_err(|source| MigrationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.db
            .execute_unprepared(&sql)
            .await
            .map_err(|source| MigrationError::Seed {
                path: path.to_path_buf(),
                source,
            })?;

        info!(file = %path.display(), "Seed data loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection_with_config, DbConfig};
    use assert_matches::assert_matches;
    use sea_orm::{DbBackend, Statement};
    use tempfile::TempDir;

    async fn memory_db() -> DatabaseConnection {
        establish_connection_with_config(&DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap()
    }

    fn write(dir: &TempDir, name: &str, sql: &str) {
        fs::write(dir.path().join(name), sql).unwrap();
    }

    async fn count(db: &DatabaseConnection, table: &str) -> i64 {
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }

    #[test]
    fn discovers_sql_files_in_filename_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "002_b.sql", "");
        write(&dir, "010_c.sql", "");
        write(&dir, "001_a.sql", "");
        write(&dir, "notes.txt", "");
        fs::create_dir(dir.path().join("003_dir.sql")).unwrap();

        let migrator = SqlMigrator::new(DatabaseConnection::Disconnected, dir.path());
        let names: Vec<String> = migrator
            .discover()
            .unwrap()
            .into_iter()
            .map(|f| f.filename)
            .collect();
        assert_eq!(names, ["001_a.sql", "002_b.sql", "010_c.sql"]);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let migrator = SqlMigrator::new(DatabaseConnection::Disconnected, "/nonexistent/migrations");
        assert_matches!(migrator.discover(), Err(MigrationError::Io { .. }));
    }

    #[tokio::test]
    async fn applies_pending_files_once() {
        let dir = TempDir::new().unwrap();
        write(&dir, "001_items.sql", "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT NOT NULL);");
        write(
            &dir,
            "002_seed.sql",
            "INSERT INTO items (name) VALUES ('a');\nINSERT INTO items (name) VALUES ('b');",
        );
        let db = memory_db().await;
        let migrator = SqlMigrator::new(db.clone(), dir.path());

        let applied = migrator.run().await.unwrap();
        assert_eq!(applied, ["001_items.sql", "002_seed.sql"]);
        assert_eq!(count(&db, "items").await, 2);

        assert!(migrator.run().await.unwrap().is_empty());
        assert_eq!(count(&db, "items").await, 2);
        assert_eq!(count(&db, "schema_migrations").await, 2);
    }

    #[tokio::test]
    async fn failure_stops_the_run_and_is_not_recorded() {
        let dir = TempDir::new().unwrap();
        write(&dir, "001_ok.sql", "CREATE TABLE ok_table (id INTEGER PRIMARY KEY);");
        write(&dir, "002_broken.sql", "CREATE TABLE broken (;");
        write(&dir, "003_later.sql", "CREATE TABLE later (id INTEGER PRIMARY KEY);");
        let db = memory_db().await;
        let migrator = SqlMigrator::new(db.clone(), dir.path());

        let err = migrator.run().await.unwrap_err();
        assert_matches!(err, MigrationError::Failed { ref file, .. } if file == "002_broken.sql");

        let status = migrator.status().await.unwrap();
        assert_eq!(status.applied, ["001_ok.sql"]);
        assert_eq!(status.pending, ["002_broken.sql", "003_later.sql"]);
    }

    #[tokio::test]
    async fn status_reports_without_applying() {
        let dir = TempDir::new().unwrap();
        write(&dir, "001_t.sql", "CREATE TABLE t (id INTEGER PRIMARY KEY);");
        let db = memory_db().await;
        let migrator = SqlMigrator::new(db, dir.path());

        let status = migrator.status().await.unwrap();
        assert!(status.applied.is_empty());
        assert_eq!(status.pending, ["001_t.sql"]);
        assert_eq!(migrator.pending().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn seed_loader_executes_the_dump() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "dump.sql",
            "CREATE TABLE seeded (id INTEGER PRIMARY KEY);\nINSERT INTO seeded (id) VALUES (1), (2), (3);",
        );
        let db = memory_db().await;

        SeedLoader::new(db.clone())
            .load(&dir.path().join("dump.sql"))
            .await
            .unwrap();
        assert_eq!(count(&db, "seeded").await, 3);

        assert_matches!(
            SeedLoader::new(db).load(&dir.path().join("missing.sql")).await,
            Err(MigrationError::Io { .. })
        );
    }
}
