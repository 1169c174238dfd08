//! Telegram transport wiring via teloxide long polling.
//!
//! Everything Telegram-specific lives here: the polling loop, owner
//! extraction from the sender identity, and keyboard rendering. Replies
//! come from the router; this module only delivers them.

use crate::conversation::SessionStore;
use crate::db::Database;
use crate::models::Weekday;
use crate::router::{self, Reply};
use std::sync::Arc;
use strum::IntoEnumIterator;
use teloxide::types::{ChatAction, KeyboardButton, KeyboardMarkup};
use teloxide::{dptree, prelude::*};

/// Start long polling and block until shutdown (Ctrl-C).
pub async fn run(token: String, db: Arc<Database>, sessions: Arc<SessionStore>) {
    let bot = Bot::new(token);

    match bot.get_me().await {
        Ok(me) => log::info!("Telegram bot connected: @{}", me.username()),
        Err(e) => log::warn!("Could not verify bot token: {}", e),
    }

    let handler = Update::filter_message().endpoint(handle_message);

    log::info!("Telegram polling started");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![db, sessions])
        .default_handler(|update| async move {
            log::debug!("Unhandled update: {:?}", update);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    db: Arc<Database>,
    sessions: Arc<SessionStore>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let owner_id = user.id.0 as i64;
    let user_name = user.username.clone().unwrap_or_else(|| user.full_name());

    match router::route(&db, &sessions, owner_id, &user_name, text) {
        Ok(Reply::Text(reply)) => {
            bot.send_message(msg.chat.id, reply).await?;
        }
        Ok(Reply::ChooseDay(prompt)) => {
            bot.send_message(msg.chat.id, prompt)
                .reply_markup(weekday_keyboard())
                .await?;
        }
        Ok(Reply::Typing) => {
            bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;
        }
        Err(e) => {
            // Storage failure: fatal for this request only
            log::error!("Failed to handle message from owner {}: {}", owner_id, e);
        }
    }

    Ok(())
}

/// One-time keyboard with the seven weekday labels
fn weekday_keyboard() -> KeyboardMarkup {
    let row: Vec<KeyboardButton> = Weekday::iter()
        .map(|day| KeyboardButton::new(day.to_string()))
        .collect();
    KeyboardMarkup::new(vec![row]).one_time_keyboard(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_keyboard_has_all_seven_labels() {
        let keyboard = weekday_keyboard();
        assert_eq!(keyboard.keyboard.len(), 1);

        let labels: Vec<&str> = keyboard.keyboard[0]
            .iter()
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }
}
