use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracking::TrackingLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let prompt = format!(
            "Delete session #{} and all its breaks? This action is irreversible.",
            id
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open_initialized(&cfg.database)?;

        if !TrackingLogic::delete(&mut pool, *id)? {
            return Err(AppError::InvalidInput(format!("no session with id {}", id)));
        }

        success(format!("Session #{} has been deleted.", id));
    }

    Ok(())
}
