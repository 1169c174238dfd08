//! Weekday name assignments - one row per (owner, weekday) pair.
//!
//! Upsert-only: a new write for the same pair replaces the prior value,
//! no history retained. Rows only ever disappear through the owner's
//! clear-all.

use crate::db::Database;
use crate::models::{Assignment, Weekday};
use rusqlite::Result as SqliteResult;

/// Initialize the assignments table
pub fn init_tables(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS assignments (
            owner_id INTEGER NOT NULL,
            weekday TEXT NOT NULL,
            assigned_name TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (owner_id, weekday)
        )",
        [],
    )?;
    Ok(())
}

impl Database {
    /// Insert or replace the assignment for one (owner, weekday) pair
    pub fn upsert_assignment(
        &self,
        owner_id: i64,
        weekday: Weekday,
        name: &str,
    ) -> SqliteResult<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO assignments (owner_id, weekday, assigned_name)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![owner_id, weekday, name],
        )?;
        Ok(())
    }

    /// Point lookup; a pair that was never written is `None`, not an error
    pub fn get_assignment(
        &self,
        owner_id: i64,
        weekday: Weekday,
    ) -> SqliteResult<Option<Assignment>> {
        let conn = self.conn();
        let result = conn.query_row(
            "SELECT owner_id, weekday, assigned_name, created_at, updated_at
             FROM assignments
             WHERE owner_id = ?1 AND weekday = ?2",
            rusqlite::params![owner_id, weekday],
            row_to_assignment,
        );
        match result {
            Ok(assignment) => Ok(Some(assignment)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All assignments for one owner, in insertion order
    pub fn list_assignments(&self, owner_id: i64) -> SqliteResult<Vec<Assignment>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT owner_id, weekday, assigned_name, created_at, updated_at
             FROM assignments
             WHERE owner_id = ?1
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(rusqlite::params![owner_id], row_to_assignment)?;
        rows.collect()
    }

    /// Delete every assignment for one owner; succeeds when none existed
    pub fn clear_assignments(&self, owner_id: i64) -> SqliteResult<usize> {
        let conn = self.conn();
        let deleted = conn.execute(
            "DELETE FROM assignments WHERE owner_id = ?1",
            rusqlite::params![owner_id],
        )?;
        Ok(deleted)
    }
}

fn row_to_assignment(row: &rusqlite::Row) -> rusqlite::Result<Assignment> {
    Ok(Assignment {
        owner_id: row.get(0)?,
        weekday: row.get(1)?,
        assigned_name: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
