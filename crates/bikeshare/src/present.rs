use std::io::{self, Write};

use bikeshare_core::{FilterSelection, TripReport, ValueCount};
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::Serialize;

use crate::prompt::RULE;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled statistics blocks (default)
    #[default]
    Text,
    /// One pretty-printed JSON document
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    selection: &'a FilterSelection,
    report: &'a TripReport,
}

pub fn write_report<W: Write>(
    format: OutputFormat,
    selection: &FilterSelection,
    report: &TripReport,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { selection, report })?;
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(report: &TripReport, out: &mut W) -> io::Result<()> {
    let times = &report.travel_times;
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    writeln!(out, "Most Common Month: {}", times.value.month)?;
    writeln!(
        out,
        "Most Common Day of the Week: {} ({})",
        times.value.weekday_index(),
        times.value.weekday_name()
    )?;
    writeln!(out, "Most Common Hour of the Day: {}", times.value.hour)?;
    write_footer(out, times.elapsed_secs)?;

    let stations = &report.stations;
    writeln!(out, "\nCalculating The Most Popular Stations...\n")?;
    writeln!(out, "Most Popular Start Station: {}", stations.value.start_station)?;
    writeln!(out, "Most Popular End Station: {}", stations.value.end_station)?;
    write_footer(out, stations.elapsed_secs)?;

    let durations = &report.durations;
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    writeln!(out, "Total Duration: {:.2} seconds", durations.value.total_s)?;
    writeln!(out, "Average Duration: {:.2} seconds", durations.value.average_s)?;
    write_footer(out, durations.elapsed_secs)?;

    let users = &report.demographics;
    writeln!(out, "\nCalculating User Stats...\n")?;
    writeln!(out, "User Type Statistics:")?;
    writeln!(out, "{}", counts_table("User Type", &users.value.user_types))?;

    writeln!(out, "\nGender Statistics:")?;
    match &users.value.genders {
        Some(genders) => writeln!(out, "{}", counts_table("Gender", genders))?,
        None => writeln!(out, "Gender information not available.")?,
    }

    writeln!(out, "\nBirth Year Statistics:")?;
    match &users.value.birth_years {
        Some(years) => {
            writeln!(out, "Earliest Birth Year: {}", years.earliest)?;
            writeln!(out, "Most Recent Birth Year: {}", years.most_recent)?;
            writeln!(out, "Most Common Birth Year: {}", years.most_common)?;
        }
        None => {
            let unavailable = "Birth Year information not available.";
            writeln!(out, "Earliest Birth Year: {unavailable}")?;
            writeln!(out, "Most Recent Birth Year: {unavailable}")?;
            writeln!(out, "Most Common Birth Year: {unavailable}")?;
        }
    }
    write_footer(out, users.elapsed_secs)
}

fn write_footer<W: Write>(out: &mut W, elapsed_secs: f64) -> io::Result<()> {
    writeln!(out, "\nThis took {elapsed_secs:.2} seconds.")?;
    writeln!(out, "{RULE}")
}

fn counts_table(label: &str, counts: &[ValueCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(label), Cell::new("Count")]);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
    }
    table
}
