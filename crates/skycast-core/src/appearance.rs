//! Pure selectors for how the sky looks: background gradient, forecast
//! icons, and decorative overlays.

use serde::Serialize;

use crate::weather::{Condition, TimeOfDay};

/// An sRGB color stop.
pub type Rgb = (u8, u8, u8);

/// The four background gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Warm orange, shown at sunrise.
    Dawn,
    /// Red fading into violet, shown at sunset.
    Dusk,
    /// Deep indigo, shown at night.
    Midnight,
    /// Sky blue, the default.
    Daylight,
}

impl Background {
    /// Select the gradient for a phase. `Day` and anything unrecognized
    /// share the daylight default.
    pub fn for_phase(phase: TimeOfDay) -> Self {
        match phase {
            TimeOfDay::Sunrise => Background::Dawn,
            TimeOfDay::Sunset => Background::Dusk,
            TimeOfDay::Night => Background::Midnight,
            _ => Background::Daylight,
        }
    }

    /// Start and end stops of the 135° gradient.
    pub fn stops(&self) -> (Rgb, Rgb) {
        match self {
            Background::Dawn => ((0xff, 0x7e, 0x5f), (0xfe, 0xb4, 0x7b)),
            Background::Dusk => ((0xff, 0x6b, 0x6b), (0x5f, 0x27, 0xcd)),
            Background::Midnight => ((0x0f, 0x0c, 0x29), (0x30, 0x2b, 0x63)),
            Background::Daylight => ((0x56, 0xcc, 0xf2), (0x2f, 0x80, 0xed)),
        }
    }

    /// CSS form of the gradient, used in snapshots.
    pub fn css(&self) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient(135deg, {}, {})", hex(from), hex(to))
    }
}

fn hex((r, g, b): Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Forecast-card icon assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
    Thunderstorm,
    Clear,
}

impl Icon {
    /// Exact-match dispatch with the cloudy asset as the fallback.
    pub fn for_condition(condition: Condition) -> Self {
        match condition {
            Condition::Sunny => Icon::Sunny,
            Condition::Cloudy => Icon::Cloudy,
            Condition::PartlyCloudy => Icon::PartlyCloudy,
            Condition::Rainy => Icon::Rainy,
            Condition::Thunderstorm => Icon::Thunderstorm,
            Condition::Clear => Icon::Clear,
            _ => Icon::Cloudy,
        }
    }

    /// Terminal glyph. Clear skies reuse the sun.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sunny | Icon::Clear => "☀",
            Icon::Cloudy => "☁",
            Icon::PartlyCloudy => "⛅",
            Icon::Rainy => "☂",
            Icon::Thunderstorm => "⛈",
        }
    }
}

/// Which decorative overlays are drawn over the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Decorations {
    pub sun: bool,
    pub moon: bool,
    pub stars: bool,
    pub clouds: bool,
    pub wind: bool,
    pub rain: bool,
    pub thunder: bool,
}

impl Decorations {
    /// Overlays are a function of the phase and the current condition only.
    pub fn for_sky(phase: TimeOfDay, condition: Condition) -> Self {
        let night = phase == TimeOfDay::Night;
        Self {
            sun: phase == TimeOfDay::Day,
            moon: night,
            stars: night,
            clouds: condition.is_cloudy(),
            wind: condition == Condition::Windy,
            rain: condition == Condition::Rainy,
            thunder: condition == Condition::Thunderstorm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_per_phase() {
        assert_eq!(Background::for_phase(TimeOfDay::Sunrise), Background::Dawn);
        assert_eq!(Background::for_phase(TimeOfDay::Day), Background::Daylight);
        assert_eq!(Background::for_phase(TimeOfDay::Sunset), Background::Dusk);
        assert_eq!(Background::for_phase(TimeOfDay::Night), Background::Midnight);
        assert_eq!(
            Background::for_phase(TimeOfDay::Unrecognized),
            Background::Daylight
        );
    }

    #[test]
    fn test_background_css() {
        assert_eq!(
            Background::Dusk.css(),
            "linear-gradient(135deg, #ff6b6b, #5f27cd)"
        );
        assert_eq!(
            Background::Daylight.css(),
            "linear-gradient(135deg, #56ccf2, #2f80ed)"
        );
    }

    #[test]
    fn test_icon_exact_matches() {
        assert_eq!(Icon::for_condition(Condition::Sunny), Icon::Sunny);
        assert_eq!(Icon::for_condition(Condition::Cloudy), Icon::Cloudy);
        assert_eq!(
            Icon::for_condition(Condition::PartlyCloudy),
            Icon::PartlyCloudy
        );
        assert_eq!(Icon::for_condition(Condition::Rainy), Icon::Rainy);
        assert_eq!(
            Icon::for_condition(Condition::Thunderstorm),
            Icon::Thunderstorm
        );
        assert_eq!(Icon::for_condition(Condition::Clear), Icon::Clear);
    }

    #[test]
    fn test_icon_falls_back_to_cloudy() {
        assert_eq!(Icon::for_condition(Condition::Windy), Icon::Cloudy);
        assert_eq!(Icon::for_condition(Condition::Unrecognized), Icon::Cloudy);
    }

    #[test]
    fn test_clear_shares_sun_glyph() {
        assert_eq!(Icon::Clear.glyph(), Icon::Sunny.glyph());
    }

    #[test]
    fn test_decorations_day_sunny() {
        let d = Decorations::for_sky(TimeOfDay::Day, Condition::Sunny);
        assert!(d.sun);
        assert!(!d.moon && !d.stars && !d.clouds && !d.rain);
    }

    #[test]
    fn test_decorations_night_partly_cloudy() {
        let d = Decorations::for_sky(TimeOfDay::Night, Condition::PartlyCloudy);
        assert!(d.moon && d.stars && d.clouds);
        assert!(!d.sun);
    }

    #[test]
    fn test_decorations_weather_effects() {
        assert!(Decorations::for_sky(TimeOfDay::Sunset, Condition::Windy).wind);
        assert!(Decorations::for_sky(TimeOfDay::Sunset, Condition::Rainy).rain);
        let storm = Decorations::for_sky(TimeOfDay::Sunrise, Condition::Thunderstorm);
        assert!(storm.thunder);
        assert!(!storm.rain);
        assert!(!storm.sun);
    }
}
