//! Calliope CLI binary.
//!
//! Interactive play loop over a story session: start from a genre, pick
//! numbered options, save the accumulated story as a PDF at any point.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, play};

    // Load .env for API keys and service endpoints
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Play {
            genre,
            model,
            output,
        } => {
            play(genre, &model, &output).await?;
        }
    }

    Ok(())
}
