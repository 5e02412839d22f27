//! Command-line interface for the interactive play loop.

use calliope_error::{CalliopeErrorKind, CalliopeResult};
use calliope_export::render_story;
use calliope_models::{HttpAssetFetcher, IllustrationClient, OpenAiClient};
use calliope_story::StoryEngine;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Calliope - create your own interactive story.
#[derive(Parser)]
#[command(name = "calliope", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play an interactive story session
    Play {
        /// Story genre (e.g. fantasy, sci-fi, mystery); prompted for if omitted
        #[arg(long)]
        genre: Option<String>,

        /// Generation model identifier
        #[arg(long, default_value = "gpt-4")]
        model: String,

        /// Where to write the exported story
        #[arg(long, default_value = "interactive_story.pdf")]
        output: PathBuf,
    },
}

/// Run one interactive session to completion or quit.
pub async fn play(genre: Option<String>, model: &str, output: &Path) -> CalliopeResult<()> {
    let driver = OpenAiClient::new(model)?;
    // Illustration is optional: without an endpoint the story runs unillustrated.
    let illustrator = match IllustrationClient::new() {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "Illustration service not configured, continuing without images");
            None
        }
    };
    let mut engine = StoryEngine::new(driver, illustrator);

    let genre = match genre {
        Some(genre) => genre,
        None => prompt("What kind of story would you like to create? (e.g., fantasy, sci-fi, mystery): "),
    };

    match engine.start(genre.trim()).await {
        Ok(turn) => println!("\n{}", turn.narrative()),
        Err(e) => {
            eprintln!("Could not start the story: {e}");
            return Err(e);
        }
    }

    loop {
        if engine.is_ended() {
            println!("Your story has reached an ending!");
        } else {
            let options = engine.live_options();
            if options.is_empty() {
                println!("No options available.");
            } else {
                println!("Here are some options for what happens next:");
                for option in options {
                    println!("  {option}");
                }
            }
        }

        let input = prompt("\nChoose an option number, 'save', or 'quit': ");
        let input = input.trim();

        match input {
            "quit" | "q" => break,
            "save" | "s" => {
                save(engine.turns(), output).await?;
                println!("Saved {}", output.display());
            }
            _ => match input.parse::<usize>() {
                Ok(n) if n >= 1 => match engine.choose(n - 1).await {
                    Ok(turn) => println!("\n{}", turn.narrative()),
                    Err(e) => report_choice_error(&e),
                },
                _ => println!("Enter an option number, 'save', or 'quit'."),
            },
        }
    }

    Ok(())
}

async fn save(turns: &[calliope_core::Turn], output: &Path) -> CalliopeResult<()> {
    let fetcher = HttpAssetFetcher::new()?;
    let bytes = render_story(turns, &fetcher).await?;
    std::fs::write(output, bytes).map_err(|e| {
        calliope_error::ExportError::new(calliope_error::ExportErrorKind::Document(format!(
            "failed to write {}: {}",
            output.display(),
            e
        )))
    })?;
    Ok(())
}

fn report_choice_error(err: &calliope_error::CalliopeError) {
    match err.kind() {
        CalliopeErrorKind::Session(e) => println!("{}", e.kind),
        // Generation failures leave the session unchanged; the same choice
        // can simply be retried.
        CalliopeErrorKind::Generation(e) => println!("Generation failed ({}), try again.", e.kind),
        other => println!("Error: {other}"),
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok();
    line
}
