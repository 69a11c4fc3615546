use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use table_finder::display::sink::{ConsoleSink, JsonSink, ReportSink, report};
use table_finder::domain::fit_search::{find_all, find_one};
use table_finder::domain::party_size::PartySize;
use table_finder::input::prompt::prompt_party_size;
use table_finder::loader::layouts::BuiltinLayout;
use table_finder::{load_grid, logger};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// First table that fits.
    One,
    /// Every fitting table and adjacent pair.
    All,
}

/// Finds restaurant tables, or pairs of adjacent tables, for a party.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON grid file to search instead of a built-in layout.
    #[arg(long, conflicts_with = "layout")]
    grid: Option<String>,

    /// Built-in layout to search.
    #[arg(long, value_enum, default_value = "occupied")]
    layout: BuiltinLayout,

    #[arg(long, value_enum, default_value = "all")]
    mode: Mode,

    /// Party size; prompted for interactively when omitted.
    #[arg(long)]
    party_size: Option<PartySize>,

    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init();
    log::info!("Logger initialized. Starting table finder.");

    let grid = match &cli.grid {
        Some(path) => load_grid(path).with_context(|| format!("Could not load grid from '{}'", path))?,
        None => cli.layout.load().with_context(|| format!("Could not load built-in layout {:?}", cli.layout))?,
    };

    let mut sink: Box<dyn ReportSink> = if cli.json { Box::new(JsonSink::new(io::stdout())) } else { Box::new(ConsoleSink::new(io::stdout())) };

    sink.show_layout(&grid)?;

    let party_size = match cli.party_size {
        Some(party_size) => party_size,
        // Keep stdout clean for the JSON document.
        None if cli.json => prompt_party_size(&mut io::stdin().lock(), &mut io::stderr())?,
        None => prompt_party_size(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let results: Vec<_> = match cli.mode {
        Mode::One => find_one(&grid, party_size)?.into_iter().collect(),
        Mode::All => find_all(&grid, party_size)?,
    };

    report(sink.as_mut(), &grid, party_size, &results)?;

    Ok(())
}
