//! Regional flights between Purdue University Airport and Chicago O'Hare.
//!
//! United Express publishes a small fixed schedule, operated by SkyWest.
//! Times are local to each airport: Lafayette keeps Eastern time and O'Hare
//! keeps Central, so a 65-minute westbound flight lands five minutes after
//! it leaves.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::format_minutes;

/// Marketing carrier for every flight.
pub const CARRIER: &str = "United Express";

/// Operating carrier for every flight.
pub const OPERATOR: &str = "SkyWest";

/// Published frequency. Which departure is dropped on single-flight days is
/// not published, so every listed flight is returned for every request.
pub const SERVICE_NOTE: &str = "1 flight daily Tue/Wed/Sat, 2 flights daily Mon/Thu/Fri/Sun";

const AIRCRAFT: &str = "Bombardier CRJ200";

/// An airport served by the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

pub const LAFAYETTE: Airport = Airport {
    code: "LAF",
    name: "Purdue University Airport",
    city: "West Lafayette",
};

pub const OHARE: Airport = Airport {
    code: "ORD",
    name: "Chicago O'Hare International Airport",
    city: "Chicago",
};

/// Direction of travel, named by airport codes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightDirection {
    #[default]
    #[serde(rename = "laf-to-ord")]
    LafayetteToChicago,
    #[serde(rename = "ord-to-laf")]
    ChicagoToLafayette,
}

impl FlightDirection {
    pub const ALL: [FlightDirection; 2] = [
        FlightDirection::LafayetteToChicago,
        FlightDirection::ChicagoToLafayette,
    ];

    pub const fn origin(self) -> Airport {
        match self {
            FlightDirection::LafayetteToChicago => LAFAYETTE,
            FlightDirection::ChicagoToLafayette => OHARE,
        }
    }

    pub const fn destination(self) -> Airport {
        match self {
            FlightDirection::LafayetteToChicago => OHARE,
            FlightDirection::ChicagoToLafayette => LAFAYETTE,
        }
    }

    /// Human-readable heading, like `West Lafayette → Chicago`.
    pub fn label(self) -> String {
        format!("{} → {}", self.origin().city, self.destination().city)
    }

    const fn schedule(self) -> &'static [ScheduledFlight] {
        match self {
            FlightDirection::LafayetteToChicago => &FROM_LAFAYETTE,
            FlightDirection::ChicagoToLafayette => &FROM_CHICAGO,
        }
    }
}

/// One row of the published timetable. Times are (hour, minute) local to
/// the departure and arrival airports respectively.
struct ScheduledFlight {
    number: &'static str,
    departs: (u32, u32),
    arrives: (u32, u32),
    block_mins: u32,
    price_dollars: u32,
}

const FROM_LAFAYETTE: [ScheduledFlight; 2] = [
    ScheduledFlight {
        number: "UA 5043",
        departs: (6, 10),
        arrives: (6, 15),
        block_mins: 65,
        price_dollars: 98,
    },
    ScheduledFlight {
        number: "UA 5070",
        departs: (14, 37),
        arrives: (14, 42),
        block_mins: 65,
        price_dollars: 98,
    },
];

const FROM_CHICAGO: [ScheduledFlight; 2] = [
    ScheduledFlight {
        number: "UA 5027",
        departs: (12, 0),
        arrives: (14, 1),
        block_mins: 61,
        price_dollars: 103,
    },
    ScheduledFlight {
        number: "UA 5048",
        departs: (21, 9),
        arrives: (23, 10),
        block_mins: 61,
        price_dollars: 103,
    },
];

/// One scheduled flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub flight_number: &'static str,
    pub direction: FlightDirection,
    /// Local time at the origin airport.
    pub departure_time: NaiveTime,
    /// Local time at the destination airport.
    pub arrival_time: NaiveTime,
    pub origin: Airport,
    pub destination: Airport,
    /// Block time, like `1h 5min`.
    pub duration: String,
    pub duration_minutes: u32,
    /// Lowest published fare, whole US dollars.
    pub price: u32,
    pub aircraft: &'static str,
}

fn scheduled_flight(direction: FlightDirection, row: &ScheduledFlight) -> Option<Flight> {
    let (dep_hour, dep_minute) = row.departs;
    let (arr_hour, arr_minute) = row.arrives;

    Some(Flight {
        flight_number: row.number,
        direction,
        departure_time: NaiveTime::from_hms_opt(dep_hour, dep_minute, 0)?,
        arrival_time: NaiveTime::from_hms_opt(arr_hour, arr_minute, 0)?,
        origin: direction.origin(),
        destination: direction.destination(),
        duration: format_minutes(row.block_mins),
        duration_minutes: row.block_mins,
        price: row.price_dollars,
        aircraft: AIRCRAFT,
    })
}

/// Every flight in `direction`, in departure order.
pub fn flights(direction: FlightDirection) -> Vec<Flight> {
    direction
        .schedule()
        .iter()
        .filter_map(|row| scheduled_flight(direction, row))
        .collect()
}
