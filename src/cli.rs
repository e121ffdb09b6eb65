use clap::{Parser, Subcommand};
use rootnote::AppConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rootnote",
    version,
    about = "Personal plant tracker API",
    long_about = "Serves a small REST API for tracking plants and their care dates, backed by a local SQLite file"
)]
pub struct Cli {
    /// Write JSON logs to a daily rotating file in this directory instead of the console
    #[arg(long, global = true, env = "ROOTNOTE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the API server
    Run {
        /// Port to bind the API server to
        #[arg(short, long, env = "API_PORT", default_value = "3333")]
        port: u16,
        /// Host to bind the API server to
        #[arg(short = 'H', long, env = "API_HOST", default_value = "0.0.0.0")]
        host: String,
        /// SQLite database file (created if missing)
        #[arg(short, long, env = "ROOTNOTE_DB", default_value = "rootnote.db")]
        database: PathBuf,
    },
}

impl Commands {
    pub fn app_config(&self) -> AppConfig {
        match self {
            Commands::Run {
                port,
                host,
                database,
            } => AppConfig {
                host: host.clone(),
                port: *port,
                database_path: database.clone(),
            },
        }
    }
}
