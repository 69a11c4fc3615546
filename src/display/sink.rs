use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::display::render::{render_annotated, render_layout, render_result};
use crate::domain::annotation::{AnnotatedGrid, annotate};
use crate::domain::fit_search::FitResult;
use crate::domain::grid::OccupancyGrid;
use crate::domain::party_size::PartySize;
use crate::error::Result;

const DIVIDER: &str = "=================================";

/// Receives query outcomes for presentation. The search core never renders anything itself.
pub trait ReportSink {
    fn show_layout(&mut self, grid: &OccupancyGrid) -> Result<()>;

    fn show_results(&mut self, party_size: PartySize, results: &[FitResult], annotated: &AnnotatedGrid) -> Result<()>;

    fn show_no_match(&mut self, party_size: PartySize) -> Result<()>;
}

/// Hands the outcome of a fit search to `sink`, annotating the grid when there is something to show.
pub fn report<S: ReportSink + ?Sized>(sink: &mut S, grid: &OccupancyGrid, party_size: PartySize, results: &[FitResult]) -> Result<()> {
    if results.is_empty() {
        log::info!("No seating found for a party of {}.", party_size);
        return sink.show_no_match(party_size);
    }

    log::info!("Found {} seating option(s) for a party of {}.", results.len(), party_size);
    let annotated = annotate(grid, results)?;
    sink.show_results(party_size, results, &annotated)
}

/// Human readable output: result list followed by the annotated layout.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn show_layout(&mut self, grid: &OccupancyGrid) -> Result<()> {
        writeln!(self.out, "\n{}\n", DIVIDER)?;
        write!(self.out, "{}", render_layout(grid))?;
        Ok(())
    }

    fn show_results(&mut self, party_size: PartySize, results: &[FitResult], annotated: &AnnotatedGrid) -> Result<()> {
        writeln!(self.out, "\n{} (party of {}):", "Available table".bold(), party_size)?;
        for result in results {
            writeln!(self.out, " {} {}", "*".green(), render_result(result))?;
        }

        writeln!(self.out, "\n{}\n", DIVIDER)?;
        write!(self.out, "{}", render_annotated(annotated))?;
        Ok(())
    }

    fn show_no_match(&mut self, party_size: PartySize) -> Result<()> {
        writeln!(self.out, "\n{} (party of {}):", "Available table".bold(), party_size)?;
        writeln!(self.out, " {} No available table", "*".red())?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FitReport<'a> {
    party_size: u32,
    results: &'a [FitResult],
}

/// Machine readable output: one JSON document per query, the layout is omitted.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, party_size: PartySize, results: &[FitResult]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &FitReport { party_size: party_size.get(), results })?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn show_layout(&mut self, _grid: &OccupancyGrid) -> Result<()> {
        Ok(())
    }

    fn show_results(&mut self, party_size: PartySize, results: &[FitResult], _annotated: &AnnotatedGrid) -> Result<()> {
        self.write_report(party_size, results)
    }

    fn show_no_match(&mut self, party_size: PartySize) -> Result<()> {
        self.write_report(party_size, &[])
    }
}
