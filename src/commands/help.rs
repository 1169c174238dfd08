//! Help command - shows available commands

/// Execute the help command
pub fn execute() -> String {
    "Welcome to the Chore Rota Bot!\n\n\
    Available commands:\n\
    /start - Display available commands\n\
    /set - Set a name for a day\n\
    /who - Show the name for the current day\n\
    /tomorrow - Show the name for tomorrow\n\
    /schedule - Show your scheduled days and names\n\
    /clearall - Clear all definitions\n"
        .to_string()
}
