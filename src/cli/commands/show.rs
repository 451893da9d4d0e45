use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::storage::sqlite::SqliteStore;
use crate::utils::colors::colorize_placeholder;
use ansi_term::Colour;

/// Full detail of one entry. The memo is shown verbatim here, wrapped
/// rather than chunked the way the table cell is.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { index } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let table = EntryRepository::load_all(&store)?;

        let idx = index
            .checked_sub(1)
            .ok_or(AppError::InvalidEntryIndex(*index))?;
        let rec = table
            .record_at(idx)
            .ok_or(AppError::InvalidEntryIndex(*index))?;

        let label = |s: &str| Colour::Cyan.bold().paint(format!("{:<14}", s)).to_string();

        println!("{} {}", label("Submitted:"), rec.submitted_at);
        println!("{} {}", label("Kana:"), rec.katakana_name);
        println!("{} {}", label("Name:"), rec.kanji_name);
        println!("{} {}", label("Organization:"), rec.organization);
        println!("{} {}", label("Type:"), rec.incident_type.to_store_str());
        println!("{} {}", label("Area:"), rec.area);
        println!("{} {}", label("Address:"), rec.address);
        println!(
            "{} {}",
            label("Map link:"),
            colorize_placeholder(&rec.map_link)
        );
        println!(
            "{} {}",
            label("Lat/Lon:"),
            colorize_placeholder(&rec.coordinates.render())
        );
        println!(
            "{} {}",
            label("Photo:"),
            colorize_placeholder(&rec.photo.render())
        );
        println!("{}", label("Memo:"));
        println!("{}", textwrap::indent(&textwrap::fill(&rec.memo, 60), "  "));
    }
    Ok(())
}
