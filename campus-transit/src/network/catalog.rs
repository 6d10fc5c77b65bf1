//! Built-in campus catalog.
//!
//! This is the single canonical list of loops and stops; the map, the stop
//! listing and the route finder all read it through [`CampusNetwork`].

use super::loader::{CatalogFile, LoopSpec, StopSpec};
use super::{CampusNetwork, CampusNetworkBuilder};

fn stop(id: &str, name: &str, address: &str, lat: f64, lng: f64) -> StopSpec {
    StopSpec {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        lat,
        lng,
    }
}

fn campus_loop(
    id: &str,
    name: &str,
    short_name: &str,
    color: &str,
    stops: Vec<StopSpec>,
) -> LoopSpec {
    LoopSpec {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        color: color.to_string(),
        stops,
    }
}

/// The Purdue campus loops as a catalog document.
pub fn purdue_catalog() -> CatalogFile {
    // Shared stops, repeated verbatim in each loop that serves them
    let daniels_russell = stop(
        "3",
        "Daniels / Russell",
        "Mitch Daniels Blv & Russell St, BUS547",
        40.4305,
        -86.9250,
    );
    let armstrong = stop(
        "7",
        "Armstrong",
        "Armstrong Hall on Stadium Ave, BUS190",
        40.4310,
        -86.9180,
    );
    let electrical = stop(
        "8",
        "Electrical Engineering",
        "Electrical Engineering at Shelter, BUS538",
        40.4295,
        -86.9165,
    );
    let pmu = stop(
        "9",
        "PMU",
        "425 W State St, West Lafayette, IN",
        40.4267,
        -86.9196,
    );

    CatalogFile {
        routes: vec![
            campus_loop(
                "discovery-park",
                "Discovery Park Loop",
                "D",
                "#CFB991",
                vec![
                    stop(
                        "1",
                        "Lynn Hall",
                        "Horticulture Greenhouses, 250 West Lafayette, IN",
                        40.4245,
                        -86.9165,
                    ),
                    stop(
                        "2",
                        "CL50",
                        "648 Oval Dr, West Lafayette, IN",
                        40.4280,
                        -86.9220,
                    ),
                    daniels_russell.clone(),
                    stop(
                        "4",
                        "MacArthur Dr",
                        "Aspire Apts at Discovery Park, BUS011",
                        40.4355,
                        -86.9270,
                    ),
                    stop(
                        "5",
                        "Airport Rd / District Blvd",
                        "1501 W State St, West Lafayette, IN",
                        40.4125,
                        -86.9360,
                    ),
                    stop(
                        "6",
                        "Niswonger",
                        "1452 Aviation Dr, West Lafayette, IN",
                        40.4085,
                        -86.9395,
                    ),
                ],
            ),
            campus_loop(
                "purdue-mall",
                "Purdue Mall Loop",
                "P",
                "#9CA3AF",
                vec![
                    armstrong.clone(),
                    electrical.clone(),
                    pmu.clone(),
                    daniels_russell,
                    stop(
                        "10",
                        "Daniels / MacArthur",
                        "Aspire Apts at Discovery Park, BUS011",
                        40.4355,
                        -86.9270,
                    ),
                    stop(
                        "11",
                        "McCutcheon",
                        "McCutcheon Hall on McCutcheon, BUS491E",
                        40.4340,
                        -86.9245,
                    ),
                    stop(
                        "12",
                        "Hillenbrand",
                        "1301 3rd Street, West Lafayette, IN",
                        40.4315,
                        -86.9260,
                    ),
                    stop(
                        "13",
                        "CoRec",
                        "RSC on Jischke Dr, BUS362",
                        40.4285,
                        -86.9235,
                    ),
                ],
            ),
            campus_loop(
                "ross-ade",
                "Ross-Ade Loop",
                "R",
                "#CFB991",
                vec![
                    armstrong,
                    electrical,
                    pmu,
                    stop(
                        "14",
                        "Daniels/University",
                        "Matthews (Mary L.) Hall, 812 W State St",
                        40.4265,
                        -86.9275,
                    ),
                    stop(
                        "15",
                        "Armory",
                        "305 N University St, West Lafayette, IN",
                        40.4289,
                        -86.9205,
                    ),
                    stop(
                        "16",
                        "Tiller Dr",
                        "850 Steven Beering Dr, West Lafayette, IN",
                        40.4335,
                        -86.9210,
                    ),
                    stop(
                        "17",
                        "Hilltop",
                        "Tower Dr & Hilltop Dr, BUS472N",
                        40.4380,
                        -86.9240,
                    ),
                    stop(
                        "18",
                        "David Ross Rd / Tower Dr",
                        "800 David Ross Rd, West Lafayette, IN",
                        40.4400,
                        -86.9200,
                    ),
                ],
            ),
        ],
    }
}

/// Create the built-in Purdue campus network.
pub fn purdue_campus() -> CampusNetwork {
    purdue_catalog()
        .routes
        .into_iter()
        .fold(CampusNetworkBuilder::new(), |b, spec| b.add_loop(spec))
        .build()
}
