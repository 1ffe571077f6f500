use serde::Serialize;

use crate::error::{BikeshareError, Result};
use crate::frequency::FrequencyTable;
use crate::schema::TripColumn;
use crate::table::TripTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Rider breakdown. `genders` and `birth_years` are `None` when the city's
/// file does not carry that information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderDemographics {
    pub user_types: Vec<ValueCount>,
    pub genders: Option<Vec<ValueCount>>,
    pub birth_years: Option<BirthYears>,
}

pub fn user_stats(table: &TripTable) -> Result<RiderDemographics> {
    let user_types = table
        .text_column(TripColumn::UserType)?
        .ok_or(BikeshareError::MissingColumn {
            column: TripColumn::UserType.header(),
        })?;

    let genders = table
        .text_column(TripColumn::Gender)?
        .map(|values| value_counts(values.into_iter().flatten()));

    let birth_years = match table.int_column(TripColumn::BirthYear)? {
        Some(years) => birth_year_stats(years.into_iter().flatten()),
        None => None,
    };

    Ok(RiderDemographics {
        user_types: value_counts(user_types.into_iter().flatten()),
        genders,
        birth_years,
    })
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<ValueCount> {
    let counts: FrequencyTable<&str> = values.collect();
    counts
        .counts()
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(years: impl Iterator<Item = i64>) -> Option<BirthYears> {
    let counts: FrequencyTable<i64> = years.collect();
    let most_common = *counts.mode()?;
    let earliest = *counts.values().min()?;
    let most_recent = *counts.values().max()?;

    Some(BirthYears {
        earliest,
        most_recent,
        most_common,
    })
}
