//! Condensa CLI - summarise a local document with Gemini
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for the interactive flow and handling top-level errors.

use clap::Parser;
use colored::Colorize;
use condensa::{agent, extract, output, Config};
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "condensa")]
#[command(author, version, about = "Summarise a local document with Gemini", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to condensa.toml in cwd or home)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Pipeline failures end the run with a message, not a stack trace
    if let Err(err) = run(cli).await {
        if is_pipeline_error(&err) {
            eprintln!("{} {}", "Error:".red().bold(), err);
        } else {
            eprintln!("{} {}", "Unexpected error:".red().bold(), err);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Config first: a missing API key halts before any file I/O
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.api_key()?;

    let path_input: String = Input::new()
        .with_prompt("Path to the document (.txt, .pdf or .docx)")
        .interact_text()?;
    let path = PathBuf::from(path_input.trim());

    let text = extract::extract_text(&path)?;
    if text.trim().is_empty() {
        println!(
            "{}",
            "The file appears to be empty, nothing to summarise.".yellow()
        );
        return Ok(());
    }

    let instruction = if Confirm::new()
        .with_prompt("Use custom instructions?")
        .default(false)
        .interact()?
    {
        Input::new().with_prompt("Instructions").interact_text()?
    } else {
        config.agent.instruction.clone()
    };

    println!("Summarising {} characters...", text.len());
    let summary = agent::summarize(&text, &instruction, &config).await?;

    output::print_summary(&summary);

    if Confirm::new()
        .with_prompt("Save the summary to a file?")
        .default(true)
        .interact()?
    {
        let target: String = Input::new()
            .with_prompt("Output file")
            .default(output::DEFAULT_OUTPUT_FILE.to_string())
            .interact_text()?;
        output::write_summary(Path::new(&target), &path, &summary)?;
        println!("Summary saved to {}", target.green());
    }

    println!("{}", "Done.".green());
    Ok(())
}

/// Known taxonomy errors print as "Error:"; anything else is unexpected
fn is_pipeline_error(err: &anyhow::Error) -> bool {
    err.is::<condensa::config::ConfigError>()
        || err.is::<extract::ExtractError>()
        || err.is::<agent::AgentError>()
        || err.is::<output::OutputError>()
}
