//! Travel duration estimates from straight-line distance.
//!
//! The campus planner has no timetable, so every duration it reports is
//! derived from the haversine distance between two stops, inflated by a
//! path factor and divided by a fixed speed. These constants are policy:
//! displayed durations must match them exactly.

/// Minimum walk duration shown, in minutes.
pub const MIN_WALK_MINS: u32 = 2;

/// How a distance is travelled for estimation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// On foot across campus.
    Walk,
    /// On a campus loop bus.
    Bus,
}

impl Pace {
    /// Ratio of real path length to straight-line distance.
    pub const fn path_factor(self) -> f64 {
        match self {
            Pace::Walk => 1.5,
            Pace::Bus => 1.2,
        }
    }

    /// Assumed average speed in miles per hour.
    pub const fn speed_mph(self) -> f64 {
        match self {
            Pace::Walk => 2.0,
            Pace::Bus => 15.0,
        }
    }
}

/// Estimated whole minutes to cover `miles` (straight-line) at `pace`.
///
/// Walks that round below [`MIN_WALK_MINS`] are reported as that minimum.
pub fn estimate_minutes(miles: f64, pace: Pace) -> u32 {
    let hours = miles * pace.path_factor() / pace.speed_mph();
    let minutes = (hours * 60.0).round().max(0.0) as u32;

    match pace {
        Pace::Walk => minutes.max(MIN_WALK_MINS),
        Pace::Bus => minutes,
    }
}

/// Render minutes as `"45min"` or `"1h 10min"`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes}min")
    } else {
        format!("{}h {}min", minutes / 60, minutes % 60)
    }
}

/// Estimate and format in one step.
pub fn estimate_duration(miles: f64, pace: Pace) -> String {
    format_minutes(estimate_minutes(miles, pace))
}

/// Parse a duration label back into minutes.
///
/// Understands both our own labels (`"1h 10min"`) and the provider's
/// (`"1 hour 5 mins"`, `"2 days 3 hours"`). Returns `None` for anything
/// else, including an empty string.
pub fn parse_duration_text(text: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut seen_unit = false;
    let mut pending: Option<u32> = None;

    for token in text.split_whitespace() {
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, unit) = token.split_at(split);

        let value = if digits.is_empty() {
            // Unit on its own: pairs with the previous bare number
            pending.take()?
        } else {
            if pending.is_some() {
                return None;
            }
            let value: u32 = digits.parse().ok()?;
            if unit.is_empty() {
                pending = Some(value);
                continue;
            }
            value
        };

        total = total.saturating_add(value.saturating_mul(unit_minutes(unit)?));
        seen_unit = true;
    }

    if pending.is_some() || !seen_unit {
        return None;
    }

    Some(total)
}

fn unit_minutes(unit: &str) -> Option<u32> {
    match unit.to_ascii_lowercase().as_str() {
        "min" | "mins" | "minute" | "minutes" => Some(1),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(60),
        "d" | "day" | "days" => Some(24 * 60),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_one_mile() {
        // 1.5 mi of path at 2 mph
        assert_eq!(estimate_minutes(1.0, Pace::Walk), 45);
        assert_eq!(estimate_duration(1.0, Pace::Walk), "45min");
    }

    #[test]
    fn walk_floor_applies_only_below_two() {
        assert_eq!(estimate_duration(0.01, Pace::Walk), "2min");
        assert_eq!(estimate_duration(0.0, Pace::Walk), "2min");
        // 0.05 mi -> 2.25 min -> 2, already at the floor
        assert_eq!(estimate_minutes(0.05, Pace::Walk), 2);
        // 0.1 mi -> 4.5 min -> 5 (half rounds up)
        assert_eq!(estimate_minutes(0.1, Pace::Walk), 5);
    }

    #[test]
    fn bus_has_no_floor() {
        assert_eq!(estimate_minutes(0.0, Pace::Bus), 0);
        assert_eq!(estimate_duration(0.01, Pace::Bus), "0min");
        // 1.2 mi of road at 15 mph
        assert_eq!(estimate_minutes(1.0, Pace::Bus), 5);
        assert_eq!(estimate_minutes(12.5, Pace::Bus), 60);
    }

    #[test]
    fn hour_formatting() {
        assert_eq!(format_minutes(0), "0min");
        assert_eq!(format_minutes(59), "59min");
        assert_eq!(format_minutes(60), "1h 0min");
        assert_eq!(format_minutes(70), "1h 10min");
        assert_eq!(format_minutes(40 + 25 + 5), "1h 10min");
        assert_eq!(format_minutes(125), "2h 5min");
    }

    #[test]
    fn long_walk_uses_hours() {
        // 2 mi -> 90 min
        assert_eq!(estimate_duration(2.0, Pace::Walk), "1h 30min");
    }

    #[test]
    fn parse_own_labels() {
        assert_eq!(parse_duration_text("0min"), Some(0));
        assert_eq!(parse_duration_text("45min"), Some(45));
        assert_eq!(parse_duration_text("1h 10min"), Some(70));
        assert_eq!(parse_duration_text("2h 0min"), Some(120));
    }

    #[test]
    fn parse_provider_labels() {
        assert_eq!(parse_duration_text("1 min"), Some(1));
        assert_eq!(parse_duration_text("35 mins"), Some(35));
        assert_eq!(parse_duration_text("1 hour 5 mins"), Some(65));
        assert_eq!(parse_duration_text("2 hours"), Some(120));
        assert_eq!(parse_duration_text("1 day 3 hours"), Some(27 * 60));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_duration_text(""), None);
        assert_eq!(parse_duration_text("soon"), None);
        assert_eq!(parse_duration_text("5"), None);
        assert_eq!(parse_duration_text("5 parsecs"), None);
        assert_eq!(parse_duration_text("mins"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting then parsing gives back the minutes
        #[test]
        fn format_parse_roundtrip(m in 0u32..10_000) {
            prop_assert_eq!(parse_duration_text(&format_minutes(m)), Some(m));
        }

        /// Walking never reports less than the floor
        #[test]
        fn walk_never_below_floor(miles in 0.0f64..5.0) {
            prop_assert!(estimate_minutes(miles, Pace::Walk) >= MIN_WALK_MINS);
        }

        /// The bus is never slower than walking the same distance
        #[test]
        fn bus_not_slower_than_walk(miles in 0.0f64..5.0) {
            prop_assert!(estimate_minutes(miles, Pace::Bus) <= estimate_minutes(miles, Pace::Walk));
        }
    }
}
