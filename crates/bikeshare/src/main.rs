use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikeshare_core::{
    load_data, summarize, BikeshareError, City, DayFilter, FilterSelection, MonthFilter,
    TripReport,
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod present;
mod prompt;

use present::OutputFormat;
use prompt::Preset;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, NYC.csv and washington.csv
    /// [default: $BIKESHARE_DATA_DIR or the current directory]
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// City to analyze (chicago, new york city, washington)
    #[arg(long, value_parser = parse_arg::<City>)]
    city: Option<City>,
    /// Month to filter by (january..june) or 'all'
    #[arg(long, value_parser = parse_arg::<MonthFilter>)]
    month: Option<MonthFilter>,
    /// Day of week to filter by (monday..sunday) or 'all'
    #[arg(long, value_parser = parse_arg::<DayFilter>)]
    day: Option<DayFilter>,
    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn parse_arg<T>(value: &str) -> std::result::Result<T, String>
where
    T: for<'a> TryFrom<&'a str, Error = String>,
{
    T::try_from(value)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir, env::var_os("BIKESHARE_DATA_DIR"));

    let preset = Preset {
        city: cli.city,
        month: cli.month,
        day: cli.day,
    };
    let selection = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();
        prompt::collect_filters(&mut input, &mut output, preset)
            .context("failed to read filter selection")?
    };
    info!(
        city = %selection.city,
        month = %selection.month,
        day = %selection.day,
        data_dir = %data_dir.display(),
        "filters selected"
    );

    let mut out = io::stdout().lock();
    explore(&data_dir, &selection, cli.format, &mut out).context("failed to write report")?;
    out.flush()?;
    Ok(())
}

/// `--data-dir` wins over `BIKESHARE_DATA_DIR`, which wins over the current directory.
fn resolve_data_dir(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.or_else(|| env_value.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn load_and_summarize(
    data_dir: &Path,
    selection: &FilterSelection,
) -> bikeshare_core::Result<Option<TripReport>> {
    let table = load_data(data_dir, selection)?;
    if table.is_empty() {
        return Ok(None);
    }
    summarize(&table).map(Some)
}

/// Loads once, fans out to every aggregator and prints the outcome. Failures
/// are reported on `out` rather than propagated.
fn explore<W: Write>(
    data_dir: &Path,
    selection: &FilterSelection,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match load_and_summarize(data_dir, selection) {
        Ok(Some(report)) => present::write_report(format, selection, &report, out),
        Ok(None) => writeln!(out, "No data available for the specified filters."),
        Err(BikeshareError::FileNotFound { city, path }) => {
            warn!(%city, path = %path.display(), "data file not found");
            writeln!(out, "Error: Data file not found. ({})", path.display())
        }
        Err(err) => {
            warn!(error = %err, "statistics pass failed");
            writeln!(out, "An error occurred: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use bikeshare_core::Month;

    use super::*;

    fn fixtures() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bikeshare-core/tests/data")
    }

    fn run(data_dir: &Path, selection: FilterSelection) -> String {
        let mut out = Vec::new();
        explore(data_dir, &selection, OutputFormat::Text, &mut out).expect("explore");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn prints_every_statistics_block() {
        let text = run(
            &fixtures(),
            FilterSelection::new(City::Chicago, MonthFilter::All, DayFilter::All),
        );
        assert!(text.contains("Most Common Month: 1"));
        assert!(text.contains("Most Popular Start Station: Canal St & Madison St"));
        assert!(text.contains("Total Duration: 6300.00 seconds"));
        assert!(text.contains("Most Common Birth Year: 1985"));
    }

    #[test]
    fn empty_selection_prints_no_data_message() {
        let text = run(
            &fixtures(),
            FilterSelection::new(
                City::Washington,
                MonthFilter::Only(Month::January),
                DayFilter::All,
            ),
        );
        assert_eq!(text, "No data available for the specified filters.\n");
    }

    #[test]
    fn missing_file_and_missing_column_read_differently() {
        let all = |city| FilterSelection::new(city, MonthFilter::All, DayFilter::All);

        let missing_file = run(&fixtures().join("absent"), all(City::Chicago));
        assert!(missing_file.starts_with("Error: Data file not found."));

        let missing_column = run(&fixtures().join("missing_start_time"), all(City::Chicago));
        assert_eq!(
            missing_column,
            "An error occurred: missing 'Start Time' column in the dataset\n"
        );
    }

    #[test]
    fn flag_values_use_prompt_vocabulary() {
        assert_eq!(parse_arg::<City>("New York City"), Ok(City::NewYorkCity));
        assert!(parse_arg::<MonthFilter>("july").is_err());
    }

    #[test]
    fn data_dir_flag_wins() {
        let dir = resolve_data_dir(
            Some(PathBuf::from("/srv/bikeshare")),
            Some(OsString::from("/var/lib/bikeshare")),
        );
        assert_eq!(dir, PathBuf::from("/srv/bikeshare"));
    }

    #[test]
    fn data_dir_falls_back_to_environment() {
        let dir = resolve_data_dir(None, Some(OsString::from("/var/lib/bikeshare")));
        assert_eq!(dir, PathBuf::from("/var/lib/bikeshare"));
    }

    #[test]
    fn data_dir_defaults_to_current_directory() {
        assert_eq!(resolve_data_dir(None, None), PathBuf::from("."));
    }
}
