//! Who command - shows the name assigned to the current day

use crate::db::Database;
use crate::models::Weekday;

/// Execute the who command for the given day.
///
/// The caller resolves `today` (the router passes `Weekday::today()`).
pub fn execute(db: &Database, owner_id: i64, today: Weekday) -> Result<String, String> {
    let assignment = db
        .get_assignment(owner_id, today)
        .map_err(|e| format!("Failed to look up assignment: {}", e))?;

    match assignment {
        Some(a) => Ok(format!("The name for today is '{}'.", a.assigned_name)),
        None => Ok("No name scheduled for today.".to_string()),
    }
}
