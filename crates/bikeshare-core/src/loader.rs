use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::columns::{build_trip_dataframe, HeaderLayout, TripColumns};
use crate::error::{BikeshareError, Result};
use crate::model::{City, FilterSelection};
use crate::table::TripTable;

/// Loads the selected city's trips from `data_dir` and narrows them to the
/// selected month and day.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = data_dir.join(selection.city.file_name());
    let table = read_city_file(selection.city, &path)?;
    let filtered = table.filter(selection.month, selection.day)?;

    debug!(
        city = %selection.city,
        month = %selection.month,
        day = %selection.day,
        loaded = table.len(),
        kept = filtered.len(),
        "filtered trip table"
    );

    Ok(filtered)
}

pub fn read_city_file(city: City, path: &Path) -> Result<TripTable> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => BikeshareError::FileNotFound {
            city,
            path: path.to_path_buf(),
        },
        _ => BikeshareError::Io(err),
    })?;

    debug!(path = %path.display(), "reading trip file");
    read_trip_table(BufReader::new(file))
}

pub fn read_trip_table<R: Read>(reader: R) -> Result<TripTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let layout = HeaderLayout::from_headers(&headers)?;
    let mut columns = TripColumns::new(&layout);

    for (offset, record) in csv_reader.records().enumerate() {
        let record = record?;
        // header occupies line 1
        columns.push_record(&layout, &record, offset + 2)?;
    }

    debug!(rows = columns.len(), "parsed trip records");
    let df = build_trip_dataframe(columns)?;
    TripTable::from_dataframe(df)
}
