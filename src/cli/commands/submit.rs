use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::AppResult;
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { photo } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        let record = SubmitLogic::apply(&mut store, cfg, photo.as_deref())?;

        success(format!(
            "Entry submitted at {} ({} / {}).",
            record.submitted_at,
            record.incident_type.to_store_str(),
            record.area
        ));
    }
    Ok(())
}
