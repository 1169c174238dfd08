//! Schedule command - lists all scheduled days and names for the owner

use crate::db::Database;

/// Execute the schedule command
pub fn execute(db: &Database, owner_id: i64) -> Result<String, String> {
    let assignments = db
        .list_assignments(owner_id)
        .map_err(|e| format!("Failed to list assignments: {}", e))?;

    if assignments.is_empty() {
        return Ok("No days and names scheduled yet.".to_string());
    }

    let mut message = String::from("Your scheduled days and names:\n");
    for a in &assignments {
        message.push_str(&format!("{}: {}\n", a.weekday, a.assigned_name));
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_empty_schedule() {
        let db = Database::new(":memory:").unwrap();
        let reply = execute(&db, 42).unwrap();
        assert_eq!(reply, "No days and names scheduled yet.");
    }

    #[test]
    fn test_lists_all_pairs() {
        let db = Database::new(":memory:").unwrap();
        db.upsert_assignment(42, Weekday::Monday, "Alice").unwrap();
        db.upsert_assignment(42, Weekday::Thursday, "Bob").unwrap();

        let reply = execute(&db, 42).unwrap();
        assert_eq!(
            reply,
            "Your scheduled days and names:\nMonday: Alice\nThursday: Bob\n"
        );
    }

    #[test]
    fn test_only_own_rows() {
        let db = Database::new(":memory:").unwrap();
        db.upsert_assignment(42, Weekday::Monday, "Bob").unwrap();
        db.upsert_assignment(43, Weekday::Monday, "Carl").unwrap();

        let reply = execute(&db, 42).unwrap();
        assert!(reply.contains("Bob"));
        assert!(!reply.contains("Carl"));
    }
}
