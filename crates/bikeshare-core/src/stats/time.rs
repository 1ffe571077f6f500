use chrono::{Datelike, Timelike, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{BikeshareError, Result};
use crate::frequency::FrequencyTable;
use crate::model::{weekday_name, WEEKDAYS};
use crate::table::TripTable;

/// Most frequent start month (1-12), weekday and hour (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelTimes {
    pub month: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub hour: u32,
}

impl TravelTimes {
    /// Weekday as an index, 0 = Monday.
    pub fn weekday_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

pub fn time_stats(table: &TripTable) -> Result<TravelTimes> {
    let starts = table.start_times()?;

    let months: FrequencyTable<u32> = starts.iter().map(|ts| ts.month()).collect();
    let weekdays: FrequencyTable<u32> = starts
        .iter()
        .map(|ts| ts.weekday().num_days_from_monday())
        .collect();
    let hours: FrequencyTable<u32> = starts.iter().map(|ts| ts.hour()).collect();

    Ok(TravelTimes {
        month: *months.mode().ok_or(BikeshareError::EmptyTable)?,
        weekday: weekdays
            .mode()
            .and_then(|index| WEEKDAYS.get(*index as usize).copied())
            .ok_or(BikeshareError::EmptyTable)?,
        hour: *hours.mode().ok_or(BikeshareError::EmptyTable)?,
    })
}
