use clap::{Parser, Subcommand};

/// Command-line interface definition for fieldpost
/// CLI application to record incident field reports with local storage
#[derive(Parser)]
#[command(
    name = "fieldpost",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple incident reporting CLI: draft, submit and track field reports using local storage",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or custom storage)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Edit the in-progress report draft (autosaved on every change)
    Draft {
        /// Reporter name in kana
        #[arg(long = "kana", value_name = "NAME")]
        kana: Option<String>,

        /// Reporter name in kanji
        #[arg(long = "name", value_name = "NAME")]
        name: Option<String>,

        /// Reporting organization
        #[arg(long = "org", value_name = "ORG")]
        org: Option<String>,

        /// Incident type: rescue-needed, fire, flood, landslide,
        /// building-damage, other
        #[arg(long = "incident-type", value_name = "TYPE")]
        incident_type: Option<String>,

        /// Affected area (district, neighborhood, ...)
        #[arg(long = "area", value_name = "AREA")]
        area: Option<String>,

        /// Street address, if known
        #[arg(long = "address", value_name = "ADDRESS")]
        address: Option<String>,

        /// Map link for the incident location (usually set via `map`)
        #[arg(long = "map-link", value_name = "URL")]
        map_link: Option<String>,

        /// Free-text notes
        #[arg(long = "memo", value_name = "TEXT")]
        memo: Option<String>,

        /// Number of people needing rescue (rescue-needed only);
        /// clears the unknown-people flag
        #[arg(long = "people", value_name = "COUNT", conflicts_with = "unknown_people")]
        people: Option<String>,

        /// Mark the people count as unknown; clears any entered count
        #[arg(long = "unknown-people")]
        unknown_people: bool,

        /// Print the current draft and its submit readiness
        #[arg(long = "print")]
        print: bool,

        /// Discard the draft entirely (asks for confirmation)
        #[arg(long = "clear")]
        clear: bool,

        /// Skip the confirmation prompt (only with --clear)
        #[arg(long = "yes", requires = "clear")]
        yes: bool,
    },

    /// Pick a map point: builds the map link and reverse-geocodes the address
    Map {
        /// Latitude of the picked point (decimal degrees)
        #[arg(long = "lat", value_name = "LAT", allow_hyphen_values = true)]
        lat: String,

        /// Longitude of the picked point (decimal degrees)
        #[arg(long = "lon", value_name = "LON", allow_hyphen_values = true)]
        lon: String,

        /// Formatted address answered by the geocoder for this point;
        /// omit to simulate a lookup with no result
        #[arg(long = "address", value_name = "ADDRESS")]
        address: Option<String>,

        /// Copy the link into the draft without asking
        #[arg(long = "yes")]
        yes: bool,
    },

    /// Submit the current draft as a new entry
    Submit {
        /// Attach a photo file to the submitted entry
        #[arg(long = "photo", value_name = "FILE")]
        photo: Option<String>,
    },

    /// List submitted entries
    List,

    /// Show one entry in full detail
    Show {
        /// Entry index as printed by `list` (1-based)
        index: usize,
    },

    /// Delete one entry by index
    Del {
        /// Entry index as printed by `list` (1-based)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long = "yes")]
        yes: bool,
    },

    /// Manage the local storage (integrity checks, diagnostics)
    Db {
        #[arg(long = "check", help = "Check storage integrity")]
        check: bool,

        #[arg(long = "info", help = "Show storage information")]
        info: bool,
    },

    /// Create a backup copy of the storage file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup with gzip
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
