//! SQLite connection pool and schema bootstrap.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Result as SqliteResult;
use std::path::Path;

use crate::db::tables;

pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path` and bootstrap the schema.
    ///
    /// `:memory:` opens an in-memory database pinned to a single pooled
    /// connection so every caller sees the same store.
    pub fn new(path: &str) -> SqliteResult<Self> {
        let pool = if path == ":memory:" {
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())
        } else {
            if let Some(dir) = Path::new(path).parent() {
                if !dir.as_os_str().is_empty() {
                    std::fs::create_dir_all(dir).ok();
                }
            }
            Pool::builder().build(SqliteConnectionManager::file(path))
        }
        .expect("Failed to build SQLite connection pool");

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a pooled connection
    pub fn conn(&self) -> DbConn {
        self.pool
            .get()
            .expect("Failed to get database connection from pool")
    }

    fn init_schema(&self) -> SqliteResult<()> {
        let conn = self.conn();
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        tables::assignments::init_tables(&conn)?;
        Ok(())
    }
}
