use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        if Path::new(file).exists()
            && !*force
            && !confirm(&format!("The file '{}' already exists. Overwrite it?", file))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        BackupLogic::backup(cfg, file, *compress)?;
        success(format!("Backup written to '{}'.", file));
    }
    Ok(())
}
