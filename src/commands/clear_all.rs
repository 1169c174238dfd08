//! Clear-all command - removes every assignment for the owner

use crate::db::Database;

/// Execute the clear-all command; succeeds even when nothing was stored
pub fn execute(db: &Database, owner_id: i64, user_name: &str) -> Result<String, String> {
    let deleted = db
        .clear_assignments(owner_id)
        .map_err(|e| format!("Failed to clear assignments: {}", e))?;

    log::info!("Cleared {} assignments for owner {}", deleted, owner_id);
    Ok(format!("All data has been cleared for {}.", user_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_clears_and_confirms() {
        let db = Database::new(":memory:").unwrap();
        db.upsert_assignment(42, Weekday::Monday, "Alice").unwrap();

        let reply = execute(&db, 42, "alice_t").unwrap();
        assert_eq!(reply, "All data has been cleared for alice_t.");
        assert!(db.list_assignments(42).unwrap().is_empty());
    }

    #[test]
    fn test_clear_on_empty_store_still_succeeds() {
        let db = Database::new(":memory:").unwrap();
        let reply = execute(&db, 42, "alice_t").unwrap();
        assert_eq!(reply, "All data has been cleared for alice_t.");
    }

    #[test]
    fn test_does_not_touch_other_owners() {
        let db = Database::new(":memory:").unwrap();
        db.upsert_assignment(42, Weekday::Monday, "Bob").unwrap();
        db.upsert_assignment(43, Weekday::Monday, "Carl").unwrap();

        execute(&db, 42, "bob_t").unwrap();
        assert_eq!(db.list_assignments(43).unwrap().len(), 1);
    }
}
