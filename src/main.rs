use dotenv::dotenv;
use std::sync::Arc;

mod channels;
mod commands;
mod config;
mod conversation;
mod db;
mod models;
mod router;

use config::Config;
use conversation::SessionStore;
use db::Database;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to initialize database");
    let db = Arc::new(db);

    let token = config
        .load_token()
        .expect("Failed to read bot token file");

    // Per-owner scratch state for the set conversation
    let sessions = Arc::new(SessionStore::new());

    log::info!("Starting Telegram channel");
    channels::telegram::run(token, db, sessions).await;
}
