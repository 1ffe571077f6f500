use std::fmt;

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name of the city's trip file inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "NYC.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for City {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.as_str() == normalized)
            .ok_or_else(|| format!("unknown city '{}'", value.trim()))
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Months covered by the trip files, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Calendar month number, January = 1.
    pub fn number(&self) -> u32 {
        let position = Month::ALL
            .iter()
            .position(|month| month == self)
            .unwrap_or_default();
        position as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Month {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Month::ALL
            .into_iter()
            .find(|month| month.as_str() == normalized)
            .ok_or_else(|| format!("unknown month '{}'", value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, timestamp: &NaiveDateTime) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => timestamp.month() == month.number(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => month.fmt(f),
        }
    }
}

impl TryFrom<&str> for MonthFilter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        Month::try_from(value).map(MonthFilter::Only)
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, timestamp: &NaiveDateTime) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => timestamp.weekday() == *day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl TryFrom<&str> for DayFilter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day) == normalized)
            .map(DayFilter::Only)
            .ok_or_else(|| format!("unknown day '{}'", value.trim()))
    }
}

impl Serialize for DayFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn city_parsing_is_case_insensitive_and_exact() {
        assert_eq!(City::try_from("Chicago"), Ok(City::Chicago));
        assert_eq!(City::try_from("  NEW YORK CITY "), Ok(City::NewYorkCity));
        assert!(City::try_from("nyc").is_err());
        assert!(City::try_from("new york").is_err());
    }

    #[test]
    fn month_numbers_follow_calendar_order() {
        let numbers: Vec<u32> = Month::ALL.iter().map(Month::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(MonthFilter::try_from("ALL"), Ok(MonthFilter::All));
        assert_eq!(
            MonthFilter::try_from("March"),
            Ok(MonthFilter::Only(Month::March))
        );
        assert!(MonthFilter::try_from("july").is_err());
        assert!(MonthFilter::try_from("jan").is_err());
    }

    #[test]
    fn day_filter_matches_weekday() {
        let monday = NaiveDate::from_ymd_opt(2017, 1, 2)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid timestamp");
        assert_eq!(DayFilter::try_from("Monday"), Ok(DayFilter::Only(Weekday::Mon)));
        assert!(DayFilter::Only(Weekday::Mon).matches(&monday));
        assert!(!DayFilter::Only(Weekday::Sun).matches(&monday));
        assert!(DayFilter::All.matches(&monday));
        assert!(DayFilter::try_from("mon").is_err());
    }

    #[test]
    fn filters_display_in_prompt_vocabulary() {
        assert_eq!(City::NewYorkCity.to_string(), "new york city");
        assert_eq!(MonthFilter::Only(Month::June).to_string(), "june");
        assert_eq!(DayFilter::Only(Weekday::Sat).to_string(), "saturday");
        assert_eq!(DayFilter::All.to_string(), "all");
    }
}
