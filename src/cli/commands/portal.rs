use ansi_term::Colour;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::{CheckAction, CheckinLog};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Portal { worker, check } = cmd {
        let store = super::open_store(cfg)?;

        let worker = store
            .worker(worker)
            .ok_or_else(|| AppError::WorkerNotFound(worker.clone()))?;
        let action = CheckAction::from_str(check)
            .ok_or_else(|| AppError::InvalidStatus(check.clone()))?;

        let mut log = CheckinLog::new();
        let time = chrono::Local::now().format("%H:%M").to_string();
        log.toggle(&worker.id, action, &time);

        let badge = if log.checked_in() {
            Colour::Green.bold().paint(action.label())
        } else {
            Colour::Yellow.bold().paint(action.label())
        };
        println!("\n👷 {} ({}) — {}", worker.name, worker.initials, badge);

        println!("\nRecent activity:");
        for event in log.entries() {
            println!("  {} | check-{} | {}", event.time, event.action.as_str(), event.id);
        }
    }
    Ok(())
}
