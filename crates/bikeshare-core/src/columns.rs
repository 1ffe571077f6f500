use chrono::NaiveDateTime;
use polars::prelude::*;

use crate::error::{BikeshareError, Result};
use crate::schema::TripColumn;

/// Position of each known column in the source header row.
#[derive(Debug, Clone)]
pub(crate) struct HeaderLayout {
    start_time: usize,
    end_time: Option<usize>,
    trip_duration: Option<usize>,
    start_station: Option<usize>,
    end_station: Option<usize>,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl HeaderLayout {
    pub fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |column: TripColumn| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == column.header())
        };

        let start_time = find(TripColumn::StartTime).ok_or(BikeshareError::MissingColumn {
            column: TripColumn::StartTime.header(),
        })?;

        Ok(Self {
            start_time,
            end_time: find(TripColumn::EndTime),
            trip_duration: find(TripColumn::TripDuration),
            start_station: find(TripColumn::StartStation),
            end_station: find(TripColumn::EndStation),
            user_type: find(TripColumn::UserType),
            gender: find(TripColumn::Gender),
            birth_year: find(TripColumn::BirthYear),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TripColumns {
    start_time: Vec<i64>,
    end_time: Option<Vec<Option<i64>>>,
    trip_duration: Option<Vec<Option<f64>>>,
    start_station: Option<Vec<Option<String>>>,
    end_station: Option<Vec<Option<String>>>,
    user_type: Option<Vec<Option<String>>>,
    gender: Option<Vec<Option<String>>>,
    birth_year: Option<Vec<Option<i64>>>,
}

impl TripColumns {
    pub fn new(layout: &HeaderLayout) -> Self {
        fn slot<T>(index: Option<usize>) -> Option<Vec<T>> {
            index.map(|_| Vec::new())
        }

        Self {
            start_time: Vec::new(),
            end_time: slot(layout.end_time),
            trip_duration: slot(layout.trip_duration),
            start_station: slot(layout.start_station),
            end_station: slot(layout.end_station),
            user_type: slot(layout.user_type),
            gender: slot(layout.gender),
            birth_year: slot(layout.birth_year),
        }
    }

    pub fn push_record(
        &mut self,
        layout: &HeaderLayout,
        record: &csv::StringRecord,
        line_index: usize,
    ) -> Result<()> {
        let field = |index: usize| record.get(index).unwrap_or_default();

        self.start_time
            .push(parse_timestamp(field(layout.start_time), line_index)?);

        if let (Some(values), Some(index)) = (self.end_time.as_mut(), layout.end_time) {
            values.push(parse_optional_timestamp(field(index), line_index)?);
        }
        if let (Some(values), Some(index)) = (self.trip_duration.as_mut(), layout.trip_duration) {
            values.push(parse_optional_f64(
                field(index),
                line_index,
                TripColumn::TripDuration,
            )?);
        }
        if let (Some(values), Some(index)) = (self.start_station.as_mut(), layout.start_station) {
            values.push(clean_optional(field(index)));
        }
        if let (Some(values), Some(index)) = (self.end_station.as_mut(), layout.end_station) {
            values.push(clean_optional(field(index)));
        }
        if let (Some(values), Some(index)) = (self.user_type.as_mut(), layout.user_type) {
            values.push(clean_optional(field(index)));
        }
        if let (Some(values), Some(index)) = (self.gender.as_mut(), layout.gender) {
            values.push(clean_optional(field(index)));
        }
        if let (Some(values), Some(index)) = (self.birth_year.as_mut(), layout.birth_year) {
            values.push(parse_optional_year(field(index), line_index)?);
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.start_time.len()
    }
}

pub(crate) fn build_trip_dataframe(mut columns: TripColumns) -> Result<DataFrame> {
    let mut cols: Vec<Column> = Vec::new();
    let start_time = Series::new(
        TripColumn::StartTime.canonical_name().into(),
        std::mem::take(&mut columns.start_time),
    );
    cols.push(as_datetime(start_time)?.into());

    if let Some(values) = columns.end_time.take() {
        let end_time = Series::new(TripColumn::EndTime.canonical_name().into(), values);
        cols.push(as_datetime(end_time)?.into());
    }

    if let Some(values) = columns.trip_duration.take() {
        cols.push(Series::new(TripColumn::TripDuration.canonical_name().into(), values).into());
    }

    for (column, values) in [
        (TripColumn::StartStation, columns.start_station.take()),
        (TripColumn::EndStation, columns.end_station.take()),
        (TripColumn::UserType, columns.user_type.take()),
        (TripColumn::Gender, columns.gender.take()),
    ] {
        if let Some(values) = values {
            let utf8: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
            cols.push(Series::new(column.canonical_name().into(), utf8).into());
        }
    }

    if let Some(values) = columns.birth_year.take() {
        cols.push(Series::new(TripColumn::BirthYear.canonical_name().into(), values).into());
    }

    Ok(DataFrame::new(cols)?)
}

fn as_datetime(series: Series) -> Result<Series> {
    Ok(series.cast(&DataType::Datetime(TimeUnit::Microseconds, None))?)
}

pub(crate) fn micros_to_datetime(micros: i64) -> Option<NaiveDateTime> {
    chrono::DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}

pub(crate) fn parse_timestamp(value: &str, line_index: usize) -> Result<i64> {
    static FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    let trimmed = value.trim();
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.and_utc().timestamp_micros());
        }
    }
    Err(BikeshareError::DataRow {
        line_index,
        message: format!("invalid timestamp '{trimmed}'"),
    })
}

fn parse_optional_timestamp(value: &str, line_index: usize) -> Result<Option<i64>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_timestamp(value, line_index).map(Some)
}

fn parse_optional_f64(value: &str, line_index: usize, column: TripColumn) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|err| BikeshareError::DataRow {
            line_index,
            message: format!(
                "failed to parse column '{}' as float: {err}",
                column.header()
            ),
        })
}

// Birth years are written as floats ("1992.0") in the member-city files.
fn parse_optional_year(value: &str, line_index: usize) -> Result<Option<i64>> {
    let parsed = parse_optional_f64(value, line_index, TripColumn::BirthYear)?;
    Ok(parsed.map(|year| year.trunc() as i64))
}

fn clean_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
