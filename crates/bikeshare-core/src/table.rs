use chrono::NaiveDateTime;
use polars::prelude::*;

use crate::columns::micros_to_datetime;
use crate::error::{BikeshareError, Result};
use crate::model::{DayFilter, MonthFilter};
use crate::schema::TripColumn;

/// Trip records for one city, backed by a DataFrame with canonical column names.
///
/// A table always carries a `start_time` datetime column. Filtering returns a
/// new table and leaves the receiver untouched.
#[derive(Debug, Clone)]
pub struct TripTable {
    df: DataFrame,
}

impl TripTable {
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        let start_time = df
            .column(TripColumn::StartTime.canonical_name())
            .map_err(|_| BikeshareError::MissingColumn {
                column: TripColumn::StartTime.header(),
            })?;
        start_time.datetime()?;
        Ok(Self { df })
    }

    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn has_column(&self, column: TripColumn) -> bool {
        self.df.column(column.canonical_name()).is_ok()
    }

    pub fn start_times(&self) -> Result<Vec<NaiveDateTime>> {
        let timestamps = self
            .df
            .column(TripColumn::StartTime.canonical_name())?
            .datetime()?;

        (0..timestamps.len())
            .map(|idx| {
                timestamps
                    .get(idx)
                    .and_then(micros_to_datetime)
                    .ok_or_else(|| BikeshareError::DataRow {
                        line_index: idx + 2,
                        message: "start time is missing or out of range".to_string(),
                    })
            })
            .collect()
    }

    /// Text column by name, or `None` when the source file did not carry it.
    pub fn text_column(&self, column: TripColumn) -> Result<Option<&StringChunked>> {
        match self.df.column(column.canonical_name()) {
            Ok(col) => Ok(Some(col.str()?)),
            Err(_) => Ok(None),
        }
    }

    pub fn float_column(&self, column: TripColumn) -> Result<Option<&Float64Chunked>> {
        match self.df.column(column.canonical_name()) {
            Ok(col) => Ok(Some(col.f64()?)),
            Err(_) => Ok(None),
        }
    }

    pub fn int_column(&self, column: TripColumn) -> Result<Option<&Int64Chunked>> {
        match self.df.column(column.canonical_name()) {
            Ok(col) => Ok(Some(col.i64()?)),
            Err(_) => Ok(None),
        }
    }

    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> Result<TripTable> {
        if month == MonthFilter::All && day == DayFilter::All {
            return Ok(self.clone());
        }

        let keep: Vec<bool> = self
            .start_times()?
            .iter()
            .map(|ts| month.matches(ts) && day.matches(ts))
            .collect();
        let mask = Series::new("keep".into(), keep);
        let df = self.df.filter(mask.bool()?)?;

        Ok(TripTable { df })
    }
}
