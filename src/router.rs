//! Routes inbound message text to a command or the active conversation.
//!
//! Precedence is a single rule: text starting with `/` is always a command
//! (`/set` enters the conversation, unknown keywords get the invalid-command
//! reply); anything else feeds the owner's conversation if one is in
//! progress.

use crate::commands::{self, Command};
use crate::conversation::{self, SessionStore, Turn};
use crate::db::Database;
use crate::models::Weekday;

/// What the transport layer should send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message
    Text(String),
    /// Prompt rendered with the one-time weekday keyboard
    ChooseDay(String),
    /// No reply; show a typing chat action
    Typing,
}

/// Handle one inbound message for one owner.
///
/// `Err` is a storage failure: fatal for this request only, resolved by the
/// caller with a log line and no reply.
pub fn route(
    db: &Database,
    sessions: &SessionStore,
    owner_id: i64,
    user_name: &str,
    text: &str,
) -> Result<Reply, String> {
    let text = text.trim();

    if text.starts_with('/') {
        return match commands::parse(text) {
            Some(Command::Set) => Ok(turn_to_reply(conversation::begin(sessions, owner_id))),
            Some(Command::Start) => Ok(Reply::Text(commands::help::execute())),
            Some(Command::Schedule) => {
                commands::schedule::execute(db, owner_id).map(Reply::Text)
            }
            Some(Command::Tomorrow) => {
                commands::tomorrow::execute(db, owner_id, Weekday::tomorrow()).map(Reply::Text)
            }
            Some(Command::Who) => {
                commands::today::execute(db, owner_id, Weekday::today()).map(Reply::Text)
            }
            Some(Command::ClearAll) => {
                commands::clear_all::execute(db, owner_id, user_name).map(Reply::Text)
            }
            None => Ok(Reply::Text(commands::invalid_command_message())),
        };
    }

    match conversation::advance(db, sessions, owner_id, text)? {
        Some(turn) => Ok(turn_to_reply(turn)),
        None => Ok(Reply::Typing),
    }
}

fn turn_to_reply(turn: Turn) -> Reply {
    match turn {
        Turn::AskDay(prompt) => Reply::ChooseDay(prompt),
        Turn::Say(text) => Reply::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Database, SessionStore) {
        (
            Database::new(":memory:").expect("in-memory db"),
            SessionStore::new(),
        )
    }

    #[test]
    fn test_set_flow_end_to_end() {
        let (db, sessions) = fixture();

        let reply = route(&db, &sessions, 42, "alice_t", "/set").unwrap();
        assert!(matches!(reply, Reply::ChooseDay(_)));

        let reply = route(&db, &sessions, 42, "alice_t", "Tuesday").unwrap();
        assert_eq!(reply, Reply::Text("Please enter the name:".to_string()));

        let reply = route(&db, &sessions, 42, "alice_t", "Alice").unwrap();
        assert_eq!(
            reply,
            Reply::Text("Name 'Alice' is linked to day 'Tuesday'.".to_string())
        );

        let saved = db.get_assignment(42, Weekday::Tuesday).unwrap().unwrap();
        assert_eq!(saved.assigned_name, "Alice");
    }

    #[test]
    fn test_schedule_reflects_completed_flow() {
        let (db, sessions) = fixture();

        route(&db, &sessions, 42, "alice_t", "/set").unwrap();
        route(&db, &sessions, 42, "alice_t", "Tuesday").unwrap();
        route(&db, &sessions, 42, "alice_t", "Alice").unwrap();

        let reply = route(&db, &sessions, 42, "alice_t", "/schedule").unwrap();
        assert_eq!(
            reply,
            Reply::Text("Your scheduled days and names:\nTuesday: Alice\n".to_string())
        );
    }

    #[test]
    fn test_unknown_command_is_invalid() {
        let (db, sessions) = fixture();
        let reply = route(&db, &sessions, 42, "alice_t", "/frobnicate").unwrap();
        assert_eq!(
            reply,
            Reply::Text("Invalid command. Please use a valid command.".to_string())
        );
    }

    #[test]
    fn test_unknown_command_mid_flow_keeps_session() {
        let (db, sessions) = fixture();

        route(&db, &sessions, 42, "alice_t", "/set").unwrap();
        route(&db, &sessions, 42, "alice_t", "/frobnicate").unwrap();

        // The conversation still expects a day
        let reply = route(&db, &sessions, 42, "alice_t", "Monday").unwrap();
        assert_eq!(reply, Reply::Text("Please enter the name:".to_string()));
    }

    #[test]
    fn test_plain_text_without_session_is_typing() {
        let (db, sessions) = fixture();
        let reply = route(&db, &sessions, 42, "alice_t", "hello there").unwrap();
        assert_eq!(reply, Reply::Typing);
    }

    #[test]
    fn test_invalid_day_reprompts_with_keyboard() {
        let (db, sessions) = fixture();

        route(&db, &sessions, 42, "alice_t", "/set").unwrap();
        let reply = route(&db, &sessions, 42, "alice_t", "Caturday").unwrap();
        assert!(matches!(reply, Reply::ChooseDay(_)));
    }

    #[test]
    fn test_clearall_scoped_to_owner() {
        let (db, sessions) = fixture();
        db.upsert_assignment(42, Weekday::Monday, "Bob").unwrap();
        db.upsert_assignment(43, Weekday::Monday, "Carl").unwrap();

        let reply = route(&db, &sessions, 42, "bob_t", "/clearall").unwrap();
        assert_eq!(
            reply,
            Reply::Text("All data has been cleared for bob_t.".to_string())
        );
        assert!(db.list_assignments(42).unwrap().is_empty());
        assert_eq!(db.list_assignments(43).unwrap().len(), 1);
    }

    #[test]
    fn test_help_lists_every_command() {
        let (db, sessions) = fixture();
        let reply = route(&db, &sessions, 42, "alice_t", "/help").unwrap();
        let Reply::Text(text) = reply else {
            panic!("expected text reply");
        };
        for keyword in ["/start", "/set", "/who", "/tomorrow", "/schedule", "/clearall"] {
            assert!(text.contains(keyword), "help text missing {}", keyword);
        }
    }

    #[test]
    fn test_conversations_are_per_owner() {
        let (db, sessions) = fixture();

        route(&db, &sessions, 42, "alice_t", "/set").unwrap();

        // Owner 43 has no session; their plain text goes nowhere
        let reply = route(&db, &sessions, 43, "carl_t", "Tuesday").unwrap();
        assert_eq!(reply, Reply::Typing);

        // Owner 42's flow still advances
        let reply = route(&db, &sessions, 42, "alice_t", "Tuesday").unwrap();
        assert_eq!(reply, Reply::Text("Please enter the name:".to_string()));
    }
}
