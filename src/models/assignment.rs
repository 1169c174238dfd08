use crate::models::Weekday;

/// One weekday-to-name mapping for one owner
#[derive(Debug, Clone)]
pub struct Assignment {
    pub owner_id: i64,
    pub weekday: Weekday,
    pub assigned_name: String,
    pub created_at: String,
    pub updated_at: String,
}
