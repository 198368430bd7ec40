// src/main.rs

//! headliner: BBC News headline scraper CLI
//!
//! Fetches the news homepage, extracts heading text that passes the
//! headline filter, and writes the top entries to a text report.

use clap::{Parser, Subcommand};

use headliner::error::AppError;
use headliner::models::Config;
use headliner::pipeline::run_scrape;
use headliner::storage::LocalStorage;
use headliner::utils::log;

#[derive(Parser, Debug)]
#[command(
    name = "headliner",
    version = "0.1.0",
    about = "BBC News headline scraper"
)]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the homepage and write the headline report
    Scrape {
        /// Directory the report file is written into
        #[arg(short, long, default_value = ".")]
        output: String,
    },
    /// Validate the configuration file
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);

    // Initialize console logging
    log::init(&config.logging.level);

    if cli.quiet {
        config.output.console_enabled = false;
        config.logging.show_progress = false;
    }

    let result = match cli.command {
        Command::Scrape { output } => {
            let storage = LocalStorage::new(output);
            run_scrape(&config, &storage).await
        }
        Command::Validate => config.validate().map(|()| {
            log::success("Configuration is valid.");
        }),
    };

    // Failures are reported to the console; the exit code stays zero.
    if let Err(error) = result {
        report_failure(&error);
    }
}

/// Select the reporting message by error tier.
fn report_failure(error: &AppError) {
    if error.is_network() {
        log::error(&format!("Error fetching the webpage: {}", error));
    } else {
        log::error(&format!("An error occurred: {}", error));
    }
}
