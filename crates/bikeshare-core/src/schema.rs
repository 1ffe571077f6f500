#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripColumn {
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl TripColumn {
    pub const ALL: [TripColumn; 8] = [
        TripColumn::StartTime,
        TripColumn::EndTime,
        TripColumn::TripDuration,
        TripColumn::StartStation,
        TripColumn::EndStation,
        TripColumn::UserType,
        TripColumn::Gender,
        TripColumn::BirthYear,
    ];

    /// Header text used by the city trip files.
    pub fn header(&self) -> &'static str {
        match self {
            TripColumn::StartTime => "Start Time",
            TripColumn::EndTime => "End Time",
            TripColumn::TripDuration => "Trip Duration",
            TripColumn::StartStation => "Start Station",
            TripColumn::EndStation => "End Station",
            TripColumn::UserType => "User Type",
            TripColumn::Gender => "Gender",
            TripColumn::BirthYear => "Birth Year",
        }
    }

    /// Column name inside the loaded trip table.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            TripColumn::StartTime => "start_time",
            TripColumn::EndTime => "end_time",
            TripColumn::TripDuration => "trip_duration_s",
            TripColumn::StartStation => "start_station",
            TripColumn::EndStation => "end_station",
            TripColumn::UserType => "user_type",
            TripColumn::Gender => "gender",
            TripColumn::BirthYear => "birth_year",
        }
    }
}
