mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::{error, info};

use rootnote::application::use_cases::RunApplicationUseCase;
use rootnote::debug::{DebugConfig, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let debug_config = if cli.verbose {
        DebugConfig::development()
    } else {
        DebugConfig::default()
    }
    .with_log_directory(cli.log_dir.clone());
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = cli.command.app_config();

    match cli.command {
        Commands::Run { .. } => {
            info!("Starting application...");
            let use_case = RunApplicationUseCase::new(config);

            match use_case.execute().await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(e) => {
                    error!("Application failed: {:#}", e);
                    eprintln!("❌ Application failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
