use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::stats::{
    popular_stations, time_stats, trip_duration_stats, user_stats, PopularStations,
    RiderDemographics, TravelTimes, TripDurations,
};
use crate::table::TripTable;

/// An aggregate together with the wall-clock time it took to compute.
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    pub value: T,
    pub elapsed_secs: f64,
}

fn timed<T>(section: &'static str, compute: impl FnOnce() -> Result<T>) -> Result<Timed<T>> {
    let started = Instant::now();
    let value = compute()?;
    let elapsed_secs = started.elapsed().as_secs_f64();
    debug!(section, elapsed_secs, "computed statistics");
    Ok(Timed {
        value,
        elapsed_secs,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub trip_count: usize,
    pub travel_times: Timed<TravelTimes>,
    pub stations: Timed<PopularStations>,
    pub durations: Timed<TripDurations>,
    pub demographics: Timed<RiderDemographics>,
}

/// Runs every aggregator over `table` in display order.
///
/// Callers are expected to check [`TripTable::is_empty`] first; an empty table
/// is refused with [`BikeshareError::EmptyTable`].
pub fn summarize(table: &TripTable) -> Result<TripReport> {
    if table.is_empty() {
        return Err(BikeshareError::EmptyTable);
    }

    Ok(TripReport {
        trip_count: table.len(),
        travel_times: timed("travel_times", || time_stats(table))?,
        stations: timed("stations", || popular_stations(table))?,
        durations: timed("durations", || trip_duration_stats(table))?,
        demographics: timed("demographics", || user_stats(table))?,
    })
}
