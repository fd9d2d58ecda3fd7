use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkycastError};
use crate::weather::{Condition, TimeOfDay};

/// Number of days in the forecast strip.
pub const FORECAST_DAYS: usize = 7;

/// Current conditions shown in the headline.
///
/// Only the clock ticker (`observed_at`) and the phase cycler
/// (`time_of_day`) ever change this after the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in °F.
    pub temperature: i32,

    pub condition: Condition,

    pub time_of_day: TimeOfDay,

    /// Wall-clock time of the last clock tick.
    pub observed_at: DateTime<Local>,
}

/// One day of the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short day label, e.g. "Mon".
    pub label: String,

    /// High temperature in °F.
    pub high: i32,

    /// Low temperature in °F.
    pub low: i32,

    pub condition: Condition,
}

impl ForecastDay {
    pub fn new(label: impl Into<String>, high: i32, low: i32, condition: Condition) -> Self {
        Self {
            label: label.into(),
            high,
            low,
            condition,
        }
    }
}

/// Ordered, immutable seven-day forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    days: Vec<ForecastDay>,
}

impl Forecast {
    /// Build a forecast, rejecting anything but exactly [`FORECAST_DAYS`] days.
    pub fn new(days: Vec<ForecastDay>) -> Result<Self> {
        if days.len() != FORECAST_DAYS {
            return Err(SkycastError::InvalidForecast {
                expected: FORECAST_DAYS,
                actual: days.len(),
            });
        }
        Ok(Self { days })
    }

    /// A forecast with no days, used only as a momentary stand-in while a
    /// state is moved out and back in.
    pub(crate) fn vacant() -> Self {
        Self { days: Vec::new() }
    }

    /// The mock week the widget ships with.
    pub fn mock() -> Self {
        Self {
            days: vec![
                ForecastDay::new("Mon", 75, 62, Condition::Sunny),
                ForecastDay::new("Tue", 68, 58, Condition::Cloudy),
                ForecastDay::new("Wed", 72, 60, Condition::PartlyCloudy),
                ForecastDay::new("Thu", 80, 65, Condition::Sunny),
                ForecastDay::new("Fri", 65, 55, Condition::Rainy),
                ForecastDay::new("Sat", 70, 60, Condition::Thunderstorm),
                ForecastDay::new("Sun", 78, 64, Condition::Clear),
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&ForecastDay> {
        self.days.get(index)
    }

    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_forecast_has_seven_days() {
        let forecast = Forecast::mock();
        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast.get(0).unwrap().label, "Mon");
        assert_eq!(forecast.get(6).unwrap().label, "Sun");
        assert!(forecast.get(7).is_none());
    }

    #[test]
    fn test_mock_forecast_seed_values() {
        let forecast = Forecast::mock();
        let fri = forecast.get(4).unwrap();
        assert_eq!((fri.high, fri.low, fri.condition), (65, 55, Condition::Rainy));
        let sat = forecast.get(5).unwrap();
        assert_eq!(sat.condition, Condition::Thunderstorm);
    }

    #[test]
    fn test_forecast_rejects_wrong_length() {
        let days = vec![ForecastDay::new("Mon", 70, 50, Condition::Sunny); 3];
        match Forecast::new(days) {
            Err(SkycastError::InvalidForecast { expected, actual }) => {
                assert_eq!(expected, 7);
                assert_eq!(actual, 3);
            }
            other => panic!("expected InvalidForecast, got {other:?}"),
        }
    }

    #[test]
    fn test_forecast_accepts_seven_days() {
        let days = vec![ForecastDay::new("Day", 70, 50, Condition::Windy); FORECAST_DAYS];
        assert!(Forecast::new(days).is_ok());
    }
}
