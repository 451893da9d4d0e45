use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// chrono format for the submission timestamp column.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_datetime_format() -> String {
    // Year-first with zero-padded fields, the locale rendering the reports
    // have always carried.
    "%Y/%m/%d %H:%M".to_string()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            datetime_format: default_datetime_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fieldpost")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fieldpost")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fieldpost.conf")
    }

    /// Return the full path of the local storage file
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fieldpost.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and storage files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Storage file name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            datetime_format: default_datetime_format(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty storage file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Storage:     {:?}", db_path);

        Ok(())
    }

    /// Report missing fields in the raw config file, for `config --check`.
    pub fn check_raw(content: &str) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for field in ["database", "datetime_format", "separator_char"] {
            if !content.contains(field) {
                missing.push(field);
            }
        }
        missing
    }
}
