// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Load a colon-separated grape file into MongoDB, replacing the collection.
///
/// Values not given on the command line fall back to the `--config` file,
/// then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host and port of the MongoDB [default: localhost:27017]
    #[arg(long = "host_port")]
    pub host_port: Option<String>,

    /// The name of the database to use [default: test]
    #[arg(long = "db_name")]
    pub db_name: Option<String>,

    /// Collection holding the grapes [default: grapes]
    #[arg(long)]
    pub collection: Option<String>,

    /// File containing colon separated grape entries [default: ./data/grapes.db]
    #[arg(long = "file_db")]
    pub file_db: Option<PathBuf>,

    /// Seconds to wait for a usable server [default: 10]
    #[arg(long = "connect_timeout")]
    pub connect_timeout: Option<u64>,

    /// YAML file with any of the settings above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Parse the file and print the records without touching the database
    #[arg(long = "dry_run")]
    pub dry_run: bool,

    /// Log every parsed line and insert
    #[arg(long)]
    pub debug: bool,
}
