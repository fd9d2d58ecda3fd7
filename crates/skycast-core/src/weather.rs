//! Weather condition codes and time-of-day phases.
//!
//! Both enums carry an `Unrecognized` variant. Seed values come from config
//! files and CLI flags as free-form strings, and anything that does not name
//! a known value lands there instead of failing; every selector treats it
//! through its default branch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated weather state attached to current or forecast-day data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
    Thunderstorm,
    Clear,
    Windy,
    /// Any code outside the known set.
    Unrecognized,
}

impl Condition {
    /// Every known condition, in declaration order.
    pub fn all() -> &'static [Condition] {
        &[
            Condition::Sunny,
            Condition::Cloudy,
            Condition::PartlyCloudy,
            Condition::Rainy,
            Condition::Thunderstorm,
            Condition::Clear,
            Condition::Windy,
        ]
    }

    /// Wire code, e.g. `partly-cloudy`.
    pub fn code(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::PartlyCloudy => "partly-cloudy",
            Condition::Rainy => "rainy",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Clear => "clear",
            Condition::Windy => "windy",
            Condition::Unrecognized => "unrecognized",
        }
    }

    /// Human-readable name for the current-weather headline.
    pub fn title(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Clear => "Clear",
            Condition::Windy => "Windy",
            Condition::Unrecognized => "Unknown",
        }
    }

    /// Whether the condition involves cloud cover.
    pub fn is_cloudy(&self) -> bool {
        matches!(self, Condition::Cloudy | Condition::PartlyCloudy)
    }
}

impl FromStr for Condition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase().replace('_', "-");
        Ok(Condition::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .unwrap_or(Condition::Unrecognized))
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        c.code().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Simulated time-of-day phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeOfDay {
    Sunrise,
    Day,
    Sunset,
    Night,
    /// Any phase name outside the cycle.
    Unrecognized,
}

impl TimeOfDay {
    /// The cycle the phase cycler walks, in order.
    pub const SEQUENCE: [TimeOfDay; 4] = [
        TimeOfDay::Sunrise,
        TimeOfDay::Day,
        TimeOfDay::Sunset,
        TimeOfDay::Night,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TimeOfDay::Sunrise => "sunrise",
            TimeOfDay::Day => "day",
            TimeOfDay::Sunset => "sunset",
            TimeOfDay::Night => "night",
            TimeOfDay::Unrecognized => "unrecognized",
        }
    }

    /// Index of this phase within [`TimeOfDay::SEQUENCE`].
    pub fn position(&self) -> Option<usize> {
        Self::SEQUENCE.iter().position(|p| p == self)
    }
}

impl FromStr for TimeOfDay {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Ok(Self::SEQUENCE
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .unwrap_or(TimeOfDay::Unrecognized))
    }
}

impl From<String> for TimeOfDay {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(p) => p,
            Err(never) => match never {},
        }
    }
}

impl From<TimeOfDay> for String {
    fn from(p: TimeOfDay) -> Self {
        p.code().to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
