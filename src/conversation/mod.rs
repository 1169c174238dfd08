//! Two-step set conversation: collect a weekday, then a name.
//!
//! Scratch state is keyed per owner and dropped on completion. There is no
//! cancel command; re-entering `/set` restarts the flow from the day step.

use crate::db::Database;
use crate::models::Weekday;
use dashmap::DashMap;

const DAY_PROMPT: &str = "Please select a day of the week:";
const NAME_PROMPT: &str = "Please enter the name:";

/// Where an owner's set conversation currently is
#[derive(Debug, Clone)]
enum SetState {
    AwaitingDay,
    AwaitingName { day: Weekday },
}

/// Per-owner conversation scratch state, owned by the router.
///
/// The only shared mutable state outside the database. One active set
/// conversation per owner; entries never leak across owners.
pub struct SessionStore {
    sessions: DashMap<i64, SetState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    fn state(&self, owner_id: i64) -> Option<SetState> {
        self.sessions.get(&owner_id).map(|s| s.clone())
    }
}

/// A conversation reply and how to render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Ask for the day; rendered with the weekday keyboard
    AskDay(String),
    /// Plain text prompt or completion message
    Say(String),
}

/// Enter the set flow for this owner, restarting any conversation already
/// in progress.
pub fn begin(sessions: &SessionStore, owner_id: i64) -> Turn {
    sessions.sessions.insert(owner_id, SetState::AwaitingDay);
    Turn::AskDay(DAY_PROMPT.to_string())
}

/// Feed a plain-text reply into the owner's active conversation.
///
/// Returns `None` when the owner has no conversation in progress. A reply
/// that is not one of the seven weekday labels re-prompts and keeps the
/// flow in the day step.
pub fn advance(
    db: &Database,
    sessions: &SessionStore,
    owner_id: i64,
    text: &str,
) -> Result<Option<Turn>, String> {
    let Some(state) = sessions.state(owner_id) else {
        return Ok(None);
    };

    match state {
        SetState::AwaitingDay => match text.parse::<Weekday>() {
            Ok(day) => {
                sessions
                    .sessions
                    .insert(owner_id, SetState::AwaitingName { day });
                Ok(Some(Turn::Say(NAME_PROMPT.to_string())))
            }
            Err(_) => Ok(Some(Turn::AskDay(format!(
                "'{}' is not a day of the week. {}",
                text, DAY_PROMPT
            )))),
        },
        SetState::AwaitingName { day } => {
            db.upsert_assignment(owner_id, day, text)
                .map_err(|e| format!("Failed to save assignment: {}", e))?;
            sessions.sessions.remove(&owner_id);
            Ok(Some(Turn::Say(format!(
                "Name '{}' is linked to day '{}'.",
                text, day
            ))))
        }
    }
}
