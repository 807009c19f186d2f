//! CLI tool for generating the Phase 0 briefing slide deck.

mod content;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::StyleConfig;
use deck_pptx::DeckBuilder;
use std::path::PathBuf;

/// Generate the Phase 0 consulting briefing deck as a .pptx file.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output path for the generated deck
    #[arg(default_value = "phase0_briefing.pptx")]
    output: PathBuf,

    /// Print the deck plan as JSON instead of writing a file
    #[arg(long)]
    print_plan: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let plan = content::briefing_plan().context("Failed to assemble the deck plan")?;

    if args.print_plan {
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        return Ok(());
    }

    log::debug!(
        "plan holds {} of {} slides",
        plan.registered(),
        plan.total()
    );

    let builder = DeckBuilder::from_plan(StyleConfig::default(), &plan)
        .context("Failed to lay out the deck")?;
    let count = builder
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    println!("Saved: {}", args.output.display());
    println!("  Slides: {}", count);

    Ok(())
}
