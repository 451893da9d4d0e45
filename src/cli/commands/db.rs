use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info: show } = cmd {
        let store = SqliteStore::open(&cfg.database)?;

        if *check {
            let verdict = store.integrity_check()?;
            if verdict == "ok" {
                success("Storage integrity: ok");
            } else {
                warning(format!("Storage integrity: {}", verdict));
            }
            return Ok(());
        }

        if *show {
            let stats = store.info()?;
            info(format!("Storage file:   {}", cfg.database));
            info(format!("Keys:           {}", stats.keys));
            info(format!(
                "Draft:          {}",
                if stats.has_draft { "present" } else { "absent" }
            ));
            info(format!("Entries bytes:  {}", stats.entries_bytes));
            return Ok(());
        }

        warning("Nothing to do: use --check or --info.");
    }
    Ok(())
}
