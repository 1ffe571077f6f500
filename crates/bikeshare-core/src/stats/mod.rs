mod duration;
mod stations;
mod time;
mod users;

pub use duration::{trip_duration_stats, TripDurations};
pub use stations::{popular_stations, PopularStations};
pub use time::{time_stats, TravelTimes};
pub use users::{user_stats, BirthYears, RiderDemographics, ValueCount};
