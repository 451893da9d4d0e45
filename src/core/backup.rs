use crate::config::Config;
use crate::errors::AppResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io;
use std::path::Path;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the storage file to `dest_file`, optionally gzip-compressed.
    /// The destination-overwrite confirmation happens in the command
    /// handler; this only does filesystem work.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Storage file not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if compress {
            let mut input = File::open(src)?;
            let output = File::create(dest)?;
            let mut encoder = GzEncoder::new(output, Compression::default());
            io::copy(&mut input, &mut encoder)?;
            encoder.finish()?;
        } else {
            fs::copy(src, dest)?;
        }

        Ok(())
    }
}
