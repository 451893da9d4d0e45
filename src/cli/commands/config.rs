use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if !path.exists() {
                warning(format!("No configuration file at {:?}", path));
                return Ok(());
            }
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            info(format!("Configuration file {:?}:\n", path));
            println!("{}", content);
            return Ok(());
        }

        if *check {
            if !path.exists() {
                warning(format!("No configuration file at {:?}", path));
                return Ok(());
            }
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let missing = Config::check_raw(&content);
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field: {}", field));
                }
            }
            return Ok(());
        }

        warning("Nothing to do: use --print or --check.");
    }
    Ok(())
}
