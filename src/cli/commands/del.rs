use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        //
        // Confirmation prompt
        //
        let table = DeleteLogic::load(&store)?;
        let idx = index
            .checked_sub(1)
            .ok_or(AppError::InvalidEntryIndex(*index))?;
        let rec = table
            .record_at(idx)
            .ok_or(AppError::InvalidEntryIndex(*index))?;

        let prompt = format!(
            "Delete entry #{} ({}, {})? This action is irreversible.",
            index, rec.submitted_at, rec.area
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = DeleteLogic::apply(&mut store, *index)?;
        success(format!(
            "Entry #{} ({}) has been deleted.",
            index, removed.submitted_at
        ));
    }
    Ok(())
}
