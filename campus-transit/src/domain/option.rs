//! Candidate route options and their steps.
//!
//! A [`RouteOption`] is one proposed way to get between two endpoints. Both
//! the campus planner and the external directions adapter produce them, so
//! callers can rank and render a single list regardless of source.

use std::fmt;

use serde::{Serialize, Serializer};

use super::estimate::parse_duration_text;

/// Mode of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bus,
    Subway,
    Train,
    Drive,
    Transfer,
}

impl TravelMode {
    /// Display glyph for a step in this mode.
    pub const fn icon(self) -> &'static str {
        match self {
            TravelMode::Walk => "🚶",
            TravelMode::Bus => "🚌",
            TravelMode::Subway => "🚇",
            TravelMode::Train => "🚂",
            TravelMode::Drive => "🚗",
            TravelMode::Transfer => "🔄",
        }
    }

    /// Human-readable mode name.
    pub const fn label(self) -> &'static str {
        match self {
            TravelMode::Walk => "Walk",
            TravelMode::Bus => "Bus",
            TravelMode::Subway => "Subway",
            TravelMode::Train => "Train",
            TravelMode::Drive => "Drive",
            TravelMode::Transfer => "Transfer",
        }
    }
}

/// Promotional badge shown next to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    #[serde(rename = "DIRECT")]
    Direct,
    #[serde(rename = "RECOMMENDED")]
    Recommended,
    #[serde(rename = "NEARBY")]
    Nearby,
    #[serde(rename = "ALREADY THERE")]
    AlreadyThere,
}

impl Badge {
    pub const fn as_str(self) -> &'static str {
        match self {
            Badge::Direct => "DIRECT",
            Badge::Recommended => "RECOMMENDED",
            Badge::Nearby => "NEARBY",
            Badge::AlreadyThere => "ALREADY THERE",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicative price of an option.
///
/// These are flat placeholders, not computed fares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Free,
    /// A range in cents, rendered like `$2.50-5`.
    Range {
        low_cents: u32,
        high_cents: u32,
    },
}

impl Price {
    /// Lower bound in cents, used for "cheapest" ordering.
    pub fn low_cents(&self) -> u32 {
        match self {
            Price::Free => 0,
            Price::Range { low_cents, .. } => *low_cents,
        }
    }
}

fn write_dollars(f: &mut fmt::Formatter<'_>, cents: u32) -> fmt::Result {
    if cents % 100 == 0 {
        write!(f, "{}", cents / 100)
    } else {
        write!(f, "{}.{:02}", cents / 100, cents % 100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => f.write_str("FREE"),
            Price::Range {
                low_cents,
                high_cents,
            } => {
                f.write_str("$")?;
                write_dollars(f, *low_cents)?;
                f.write_str("-")?;
                write_dollars(f, *high_cents)
            }
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One leg of a route option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub mode: TravelMode,
    pub name: String,
    pub duration: String,
    pub from: String,
    pub to: String,
    pub icon: &'static str,
    /// Straight-line miles the duration was estimated from, if any.
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

impl Step {
    /// Create a step whose icon follows its mode.
    pub fn new(
        mode: TravelMode,
        name: impl Into<String>,
        duration: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            name: name.into(),
            duration: duration.into(),
            from: from.into(),
            to: to.into(),
            icon: mode.icon(),
            distance_miles: None,
        }
    }

    /// Record the straight-line distance behind this step's estimate.
    pub fn with_distance(mut self, miles: f64) -> Self {
        self.distance_miles = Some(miles);
        self
    }

    /// Override the mode's default glyph.
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }
}

/// A proposed end-to-end way to travel between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub id: String,
    /// Short label such as a loop name, `"D → P"` or `"Transit"`.
    #[serde(rename = "type")]
    pub label: String,
    pub duration: String,
    pub price: Price,
    pub transfers: u32,
    pub modes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub steps: Vec<Step>,
}

impl RouteOption {
    /// Total duration in minutes, if the label can be parsed.
    pub fn duration_minutes(&self) -> Option<u32> {
        parse_duration_text(&self.duration)
    }
}
