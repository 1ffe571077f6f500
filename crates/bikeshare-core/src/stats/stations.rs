use serde::Serialize;

use crate::error::{BikeshareError, Result};
use crate::frequency::FrequencyTable;
use crate::schema::TripColumn;
use crate::table::TripTable;

/// Most used start and end stations. The two are counted independently and
/// need not come from the same trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularStations {
    pub start_station: String,
    pub end_station: String,
}

pub fn popular_stations(table: &TripTable) -> Result<PopularStations> {
    Ok(PopularStations {
        start_station: most_common_text(table, TripColumn::StartStation)?,
        end_station: most_common_text(table, TripColumn::EndStation)?,
    })
}

fn most_common_text(table: &TripTable, column: TripColumn) -> Result<String> {
    let values = table
        .text_column(column)?
        .ok_or(BikeshareError::MissingColumn {
            column: column.header(),
        })?;

    let counts: FrequencyTable<&str> = values.into_iter().flatten().collect();
    counts
        .mode()
        .map(|value| value.to_string())
        .ok_or(BikeshareError::EmptyTable)
}
