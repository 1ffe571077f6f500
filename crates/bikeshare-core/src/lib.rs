pub mod error;
pub mod frequency;
pub mod loader;
pub mod model;
pub mod report;
pub mod schema;
pub mod stats;
pub mod table;

mod columns;

pub use error::{BikeshareError, Result};
pub use frequency::FrequencyTable;
pub use loader::{load_data, read_city_file, read_trip_table};
pub use model::{City, DayFilter, FilterSelection, Month, MonthFilter};
pub use report::{summarize, Timed, TripReport};
pub use schema::TripColumn;
pub use stats::{
    popular_stations, time_stats, trip_duration_stats, user_stats, BirthYears, PopularStations,
    RiderDemographics, TravelTimes, TripDurations, ValueCount,
};
pub use table::TripTable;
