//! Intercampus shuttle timetable.
//!
//! The long-haul shuttle between West Lafayette and Indianapolis runs the
//! same fixed timetable every day. Times are published in Eastern Standard
//! Time and are stored with a fixed -05:00 offset; the timetable does not
//! shift for daylight saving.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::LatLng;

/// Seats on every shuttle.
pub const SHUTTLE_CAPACITY: u32 = 48;

/// Timetable offset west of UTC, in seconds.
const TIMETABLE_OFFSET_WEST_SECS: i32 = 5 * 3600;

/// Indianapolis pick-up point.
pub const INDIANAPOLIS: LatLng = LatLng::new(39.773038, -86.169873);

/// West Lafayette pick-up point.
pub const WEST_LAFAYETTE: LatLng = LatLng::new(40.4240615, -86.912087);

/// Departures from Indianapolis, (hour, minute).
const FROM_INDIANAPOLIS: [(u32, u32); 8] = [
    (7, 0),
    (9, 0),
    (11, 0),
    (13, 0),
    (15, 0),
    (17, 0),
    (19, 0),
    (21, 30),
];

/// Departures from West Lafayette, (hour, minute).
const FROM_WEST_LAFAYETTE: [(u32, u32); 8] = [
    (6, 40),
    (9, 0),
    (11, 0),
    (13, 0),
    (15, 0),
    (17, 10),
    (19, 10),
    (21, 40),
];

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuttleDirection {
    IndianapolisToWestLafayette,
    WestLafayetteToIndianapolis,
}

impl ShuttleDirection {
    pub const ALL: [ShuttleDirection; 2] = [
        ShuttleDirection::IndianapolisToWestLafayette,
        ShuttleDirection::WestLafayetteToIndianapolis,
    ];

    pub const fn origin(self) -> &'static str {
        match self {
            ShuttleDirection::IndianapolisToWestLafayette => "Indianapolis",
            ShuttleDirection::WestLafayetteToIndianapolis => "West Lafayette",
        }
    }

    pub const fn destination(self) -> &'static str {
        match self {
            ShuttleDirection::IndianapolisToWestLafayette => "West Lafayette",
            ShuttleDirection::WestLafayetteToIndianapolis => "Indianapolis",
        }
    }

    const fn coords(self) -> (LatLng, LatLng) {
        match self {
            ShuttleDirection::IndianapolisToWestLafayette => (INDIANAPOLIS, WEST_LAFAYETTE),
            ShuttleDirection::WestLafayetteToIndianapolis => (WEST_LAFAYETTE, INDIANAPOLIS),
        }
    }

    /// Daily departure times as (hour, minute).
    const fn departures(self) -> &'static [(u32, u32)] {
        match self {
            ShuttleDirection::IndianapolisToWestLafayette => &FROM_INDIANAPOLIS,
            ShuttleDirection::WestLafayetteToIndianapolis => &FROM_WEST_LAFAYETTE,
        }
    }
}

/// Lifecycle of a ride. Only scheduled rides are generated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Scheduled,
}

/// One scheduled shuttle departure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShuttleRide {
    pub direction: ShuttleDirection,
    pub departure_time: DateTime<FixedOffset>,
    pub origin: &'static str,
    pub destination: &'static str,
    pub origin_coords: LatLng,
    pub destination_coords: LatLng,
    pub capacity: u32,
    pub booked_seats: u32,
    pub status: RideStatus,
}

impl ShuttleRide {
    pub fn seats_available(&self) -> u32 {
        self.capacity.saturating_sub(self.booked_seats)
    }
}

fn scheduled_ride(
    date: NaiveDate,
    direction: ShuttleDirection,
    (hour, minute): (u32, u32),
) -> Option<ShuttleRide> {
    let offset = FixedOffset::west_opt(TIMETABLE_OFFSET_WEST_SECS)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let departure_time = date.and_time(time).and_local_timezone(offset).single()?;
    let (origin_coords, destination_coords) = direction.coords();

    Some(ShuttleRide {
        direction,
        departure_time,
        origin: direction.origin(),
        destination: direction.destination(),
        origin_coords,
        destination_coords,
        capacity: SHUTTLE_CAPACITY,
        booked_seats: 0,
        status: RideStatus::Scheduled,
    })
}

/// Every ride scheduled on `date`: Indianapolis departures first, then West
/// Lafayette departures, each in time order.
pub fn rides_for_date(date: NaiveDate) -> Vec<ShuttleRide> {
    ShuttleDirection::ALL
        .into_iter()
        .flat_map(|direction| {
            direction
                .departures()
                .iter()
                .filter_map(move |&at| scheduled_ride(date, direction, at))
        })
        .collect()
}

/// Rides for `days` consecutive dates starting at `start`.
pub fn rides_for_days(start: NaiveDate, days: u32) -> Vec<ShuttleRide> {
    (0..days)
        .filter_map(|i| start.checked_add_days(Days::new(u64::from(i))))
        .flat_map(rides_for_date)
        .collect()
}
