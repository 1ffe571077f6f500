use serde::Serialize;

use crate::error::{BikeshareError, Result};
use crate::schema::TripColumn;
use crate::table::TripTable;

/// Total and mean trip duration in seconds.
///
/// A table without any durations reports zero for both rather than an
/// undefined mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripDurations {
    pub total_s: f64,
    pub average_s: f64,
    pub trip_count: usize,
}

pub fn trip_duration_stats(table: &TripTable) -> Result<TripDurations> {
    let durations = table
        .float_column(TripColumn::TripDuration)?
        .ok_or(BikeshareError::MissingColumn {
            column: TripColumn::TripDuration.header(),
        })?;

    let (total_s, trip_count) = durations
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    let average_s = if trip_count == 0 {
        0.0
    } else {
        total_s / trip_count as f64
    };

    Ok(TripDurations {
        total_s,
        average_s,
        trip_count,
    })
}
