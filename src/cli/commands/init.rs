use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::success;

/// Create the config file and the storage schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = if cli.test {
        let mut cfg = Config::default();
        if let Some(custom) = &cli.db {
            cfg.database = custom.clone();
        }
        cfg
    } else {
        Config::load()
    };

    // Opening creates the kv table in the fresh file.
    SqliteStore::open(&cfg.database)?;

    success("Initialization complete.");
    Ok(())
}
