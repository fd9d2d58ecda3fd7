//! Wall-clock source and the clock pill's text format.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Where the clock ticker reads the current time from.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Hour:minute style for the clock pill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `09:05 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `21:05`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    /// Two-digit hour and minute, without seconds.
    pub fn format(&self, at: &DateTime<Local>) -> String {
        match self {
            ClockFormat::TwelveHour => at.format("%I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => at.format("%H:%M").to_string(),
        }
    }
}
