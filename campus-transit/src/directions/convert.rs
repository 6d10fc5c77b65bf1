//! Conversion from provider responses to route options.
//!
//! Each itinerary becomes one [`RouteOption`] built from its first leg.
//! Itineraries that cannot be represented are logged and skipped; they never
//! fail the whole response.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{Badge, Price, RouteOption, Step, TravelMode};

use super::types::{DirectionsResponse, ExternalMode, Leg, LegStep};

/// Inline markup in `html_instructions`.
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Indicative price of travelling in a provider mode.
pub fn mode_price(mode: ExternalMode) -> Price {
    match mode {
        ExternalMode::Transit => Price::Range {
            low_cents: 250,
            high_cents: 500,
        },
        ExternalMode::Driving => Price::Range {
            low_cents: 500,
            high_cents: 1500,
        },
        ExternalMode::Walking => Price::Free,
    }
}

/// Convert every usable itinerary of a response, in provider order.
///
/// Option ids are `directions-{mode}-{index}` where `index` is the
/// itinerary's position in the response, so ids stay stable even when an
/// earlier itinerary is skipped.
pub fn convert_response(mode: ExternalMode, response: &DirectionsResponse) -> Vec<RouteOption> {
    let mut options = Vec::with_capacity(response.routes.len());

    for (index, itinerary) in response.routes.iter().enumerate() {
        let Some(leg) = itinerary.legs.first() else {
            debug!(mode = mode.as_str(), index, "skipping itinerary, no legs");
            continue;
        };
        options.push(convert_leg(mode, index, leg));
    }

    options
}

fn convert_leg(mode: ExternalMode, index: usize, leg: &Leg) -> RouteOption {
    let steps: Vec<Step> = leg.steps.iter().map(|s| convert_step(s, leg)).collect();
    let transfers = steps
        .iter()
        .filter(|s| s.mode == TravelMode::Transfer)
        .count() as u32;

    let badge = (mode == ExternalMode::Transit && index == 0).then_some(Badge::Recommended);

    RouteOption {
        id: format!("directions-{}-{}", mode.as_str(), index),
        label: mode.label().to_string(),
        duration: leg.duration.text.clone(),
        price: mode_price(mode),
        transfers,
        modes: vec![mode.label().to_string()],
        badge,
        steps,
    }
}

fn convert_step(step: &LegStep, leg: &Leg) -> Step {
    let transit = step.transit_details.as_ref();

    let from = transit
        .and_then(|t| t.departure_stop.as_ref())
        .map(|s| s.name.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(leg.start_address.as_str());
    let to = transit
        .and_then(|t| t.arrival_stop.as_ref())
        .map(|s| s.name.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(leg.end_address.as_str());

    Step::new(
        step_mode(step),
        step_name(step),
        step.duration.text.clone(),
        from,
        to,
    )
}

/// Map a provider step to a travel mode.
///
/// Transit steps split on vehicle type; anything unrecognised rides a bus.
pub fn step_mode(step: &LegStep) -> TravelMode {
    match step.travel_mode.as_str() {
        "WALKING" => TravelMode::Walk,
        "DRIVING" => TravelMode::Drive,
        _ => {
            let vehicle = step
                .transit_details
                .as_ref()
                .and_then(|t| t.line.as_ref())
                .and_then(|l| l.vehicle.as_ref())
                .map(|v| v.vehicle_type.as_str());
            match vehicle {
                Some("SUBWAY") => TravelMode::Subway,
                Some("TRAIN") => TravelMode::Train,
                _ => TravelMode::Bus,
            }
        }
    }
}

/// First non-empty of: line short name, line name, instruction text, mode.
fn step_name(step: &LegStep) -> String {
    let line = step.transit_details.as_ref().and_then(|t| t.line.as_ref());

    non_empty(line.and_then(|l| l.short_name.as_deref()))
        .or_else(|| non_empty(line.and_then(|l| l.name.as_deref())))
        .map(str::to_string)
        .or_else(|| {
            step.html_instructions
                .as_deref()
                .map(strip_tags)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| capitalize(&step.travel_mode))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Remove markup from an instruction string. Surrounding text, whitespace
/// included, is kept as is.
pub fn strip_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// `"WALKING"` -> `"Walking"`.
fn capitalize(mode: &str) -> String {
    let lower = mode.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::types::{
        Itinerary, NamedPlace, TextValue, TransitDetails, TransitLine, Vehicle,
    };

    fn text(s: &str) -> TextValue {
        TextValue {
            text: s.to_string(),
            value: 0,
        }
    }

    fn walking_step(html: &str) -> LegStep {
        LegStep {
            travel_mode: "WALKING".to_string(),
            duration: text("4 mins"),
            html_instructions: Some(html.to_string()),
            ..Default::default()
        }
    }

    fn transit_step(vehicle: &str, short_name: Option<&str>, name: Option<&str>) -> LegStep {
        LegStep {
            travel_mode: "TRANSIT".to_string(),
            duration: text("50 mins"),
            html_instructions: Some("Bus towards <b>Indianapolis</b>".to_string()),
            transit_details: Some(TransitDetails {
                line: Some(TransitLine {
                    name: name.map(str::to_string),
                    short_name: short_name.map(str::to_string),
                    vehicle: Some(Vehicle {
                        vehicle_type: vehicle.to_string(),
                        name: None,
                    }),
                }),
                departure_stop: Some(NamedPlace {
                    name: "CityBus Center".to_string(),
                }),
                arrival_stop: Some(NamedPlace {
                    name: "Union Station".to_string(),
                }),
                num_stops: Some(3),
            }),
            ..Default::default()
        }
    }

    fn leg(steps: Vec<LegStep>) -> Leg {
        Leg {
            duration: text("1 hour 12 mins"),
            distance: None,
            start_address: "Lafayette, IN, USA".to_string(),
            end_address: "Indianapolis, IN, USA".to_string(),
            steps,
        }
    }

    fn response(legs: Vec<Vec<Leg>>) -> DirectionsResponse {
        DirectionsResponse {
            status: "OK".to_string(),
            routes: legs
                .into_iter()
                .map(|legs| Itinerary {
                    summary: None,
                    legs,
                })
                .collect(),
            error_message: None,
        }
    }

    #[test]
    fn transit_itineraries() {
        let resp = response(vec![
            vec![leg(vec![
                walking_step("Walk to <b>CityBus Center</b>"),
                transit_step("BUS", Some("4B"), Some("Purdue West")),
            ])],
            vec![leg(vec![transit_step("TRAIN", None, Some("Cardinal"))])],
        ]);

        let options = convert_response(ExternalMode::Transit, &resp);
        assert_eq!(options.len(), 2);

        let first = &options[0];
        assert_eq!(first.id, "directions-transit-0");
        assert_eq!(first.label, "Transit");
        assert_eq!(first.duration, "1 hour 12 mins");
        assert_eq!(first.price.to_string(), "$2.50-5");
        assert_eq!(first.modes, vec!["Transit"]);
        assert_eq!(first.badge, Some(Badge::Recommended));
        assert_eq!(first.transfers, 0);

        let walk = &first.steps[0];
        assert_eq!(walk.mode, TravelMode::Walk);
        assert_eq!(walk.name, "Walk to CityBus Center");
        assert_eq!(walk.icon, "🚶");
        assert_eq!(walk.from, "Lafayette, IN, USA");
        assert_eq!(walk.to, "Indianapolis, IN, USA");

        let bus = &first.steps[1];
        assert_eq!(bus.mode, TravelMode::Bus);
        assert_eq!(bus.name, "4B");
        assert_eq!(bus.icon, "🚌");
        assert_eq!(bus.from, "CityBus Center");
        assert_eq!(bus.to, "Union Station");

        let second = &options[1];
        assert_eq!(second.id, "directions-transit-1");
        assert_eq!(second.badge, None);
        assert_eq!(second.steps[0].mode, TravelMode::Train);
        assert_eq!(second.steps[0].icon, "🚂");
        assert_eq!(second.steps[0].name, "Cardinal");
    }

    #[test]
    fn driving_and_walking_prices() {
        let resp = response(vec![vec![leg(Vec::new())]]);

        let driving = convert_response(ExternalMode::Driving, &resp);
        assert_eq!(driving[0].price.to_string(), "$5-15");
        assert_eq!(driving[0].badge, None);

        let walking = convert_response(ExternalMode::Walking, &resp);
        assert_eq!(walking[0].price, Price::Free);
        assert_eq!(walking[0].label, "Walking");
        assert_eq!(walking[0].badge, None);
    }

    #[test]
    fn itinerary_without_legs_is_skipped() {
        let resp = response(vec![Vec::new(), vec![leg(Vec::new())]]);
        let options = convert_response(ExternalMode::Transit, &resp);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "directions-transit-1");
        assert_eq!(options[0].badge, None);
    }

    #[test]
    fn step_name_fallbacks() {
        let step = transit_step("SUBWAY", Some(""), Some("Red Line"));
        assert_eq!(step_name(&step), "Red Line");
        assert_eq!(step_mode(&step), TravelMode::Subway);

        let step = transit_step("BUS", None, None);
        assert_eq!(step_name(&step), "Bus towards Indianapolis");

        let step = LegStep {
            travel_mode: "DRIVING".to_string(),
            html_instructions: Some("<div></div>".to_string()),
            ..Default::default()
        };
        assert_eq!(step_name(&step), "Driving");
        assert_eq!(step_mode(&step), TravelMode::Drive);
    }

    #[test]
    fn unknown_modes_ride_a_bus() {
        let step = LegStep {
            travel_mode: "BICYCLING".to_string(),
            ..Default::default()
        };
        assert_eq!(step_mode(&step), TravelMode::Bus);
        assert_eq!(step_name(&step), "Bicycling");
    }

    #[test]
    fn strip_nested_markup() {
        assert_eq!(
            strip_tags(r#"Turn <b>left</b> onto <span class="x">State St</span>"#),
            "Turn left onto State St"
        );
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn strip_keeps_surrounding_whitespace() {
        assert_eq!(strip_tags(" <b>Main St</b> "), " Main St ");
        assert_eq!(strip_tags("Exit<div>\n</div>"), "Exit\n");
    }
}
