//! Tomorrow command - shows the name assigned to the next day

use crate::db::Database;
use crate::models::Weekday;

/// Execute the tomorrow command for the given day.
///
/// The caller resolves `tomorrow` (the router passes `Weekday::tomorrow()`,
/// which wraps Sunday to Monday).
pub fn execute(db: &Database, owner_id: i64, tomorrow: Weekday) -> Result<String, String> {
    let assignment = db
        .get_assignment(owner_id, tomorrow)
        .map_err(|e| format!("Failed to look up assignment: {}", e))?;

    match assignment {
        Some(a) => Ok(format!(
            "The name for tomorrow ({}) is '{}'.",
            tomorrow, a.assigned_name
        )),
        None => Ok(format!("No name scheduled for tomorrow ({}).", tomorrow)),
    }
}
