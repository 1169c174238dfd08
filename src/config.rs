use std::env;
use std::fs;
use std::io;

#[derive(Clone)]
pub struct Config {
    pub token_file: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            token_file: env::var("BOT_TOKEN_FILE").unwrap_or_else(|_| "./tgb.token".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "./.db/rota.db".to_string()),
        }
    }

    /// Read the bot token from the credential file, once at startup
    pub fn load_token(&self) -> io::Result<String> {
        let raw = fs::read_to_string(&self.token_file)?;
        Ok(raw.trim().to_string())
    }
}
