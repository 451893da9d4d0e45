use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::storage::sqlite::SqliteStore;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let table = EntryRepository::load_all(&store)?;

        if table.is_empty() {
            println!("No entries.");
            return Ok(());
        }

        println!("{}", table.render(&cfg.separator_char));
        println!("{}", bold(&format!("{} entries.", table.len())));
    }
    Ok(())
}
