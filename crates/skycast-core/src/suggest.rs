//! Canned activity and clothing suggestions for a forecast day.
//!
//! The two selectors look alike but are not symmetric: a thunderstorm keeps
//! people indoors, yet only rain calls for waterproof gear. A stormy day
//! falls through to the temperature bands for clothing.

use serde::Serialize;

use crate::weather::Condition;

/// Temperature above which a day counts as hot, in °F.
const HOT_ABOVE: i32 = 75;

/// Temperature above which a day counts as mild, in °F.
const MILD_ABOVE: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySuggestion {
    Indoor,
    Beach,
    Outdoors,
    Museum,
}

impl ActivitySuggestion {
    /// Condition is checked before temperature.
    pub fn for_day(condition: Condition, high: i32) -> Self {
        if matches!(condition, Condition::Rainy | Condition::Thunderstorm) {
            ActivitySuggestion::Indoor
        } else if high > HOT_ABOVE {
            ActivitySuggestion::Beach
        } else if high > MILD_ABOVE {
            ActivitySuggestion::Outdoors
        } else {
            ActivitySuggestion::Museum
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ActivitySuggestion::Indoor => {
                "Great day for indoor activities: reading, movies, or board games!"
            }
            ActivitySuggestion::Beach => "Perfect for swimming, beach trips, or outdoor sports!",
            ActivitySuggestion::Outdoors => "Ideal for hiking, picnics, or cycling!",
            ActivitySuggestion::Museum => {
                "Good weather for a museum visit or coffee shop outing!"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingSuggestion {
    Waterproof,
    Light,
    LightJacket,
    WarmCoat,
}

impl ClothingSuggestion {
    /// Only rain triggers the waterproof branch.
    pub fn for_day(condition: Condition, high: i32) -> Self {
        if condition == Condition::Rainy {
            ClothingSuggestion::Waterproof
        } else if high > HOT_ABOVE {
            ClothingSuggestion::Light
        } else if high > MILD_ABOVE {
            ClothingSuggestion::LightJacket
        } else {
            ClothingSuggestion::WarmCoat
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ClothingSuggestion::Waterproof => {
                "Waterproof jacket, boots, and an umbrella recommended."
            }
            ClothingSuggestion::Light => "Light clothing, sunglasses, and sunscreen needed.",
            ClothingSuggestion::LightJacket => "Light jacket or sweater may be comfortable.",
            ClothingSuggestion::WarmCoat => "Warm coat, hat, and gloves recommended.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rain_overrides_heat() {
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Rainy, 80),
            ActivitySuggestion::Indoor
        );
        assert_eq!(
            ClothingSuggestion::for_day(Condition::Rainy, 80),
            ClothingSuggestion::Waterproof
        );
    }

    #[test]
    fn test_thunderstorm_only_affects_activity() {
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Thunderstorm, 80),
            ActivitySuggestion::Indoor
        );
        assert_eq!(
            ClothingSuggestion::for_day(Condition::Thunderstorm, 80),
            ClothingSuggestion::Light
        );
    }

    #[test]
    fn test_temperature_band_edges() {
        // Bands are strict: exactly 75 is mild, exactly 60 is cold.
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Sunny, 76),
            ActivitySuggestion::Beach
        );
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Sunny, 75),
            ActivitySuggestion::Outdoors
        );
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Sunny, 61),
            ActivitySuggestion::Outdoors
        );
        assert_eq!(
            ActivitySuggestion::for_day(Condition::Sunny, 60),
            ActivitySuggestion::Museum
        );
        assert_eq!(
            ClothingSuggestion::for_day(Condition::Cloudy, 75),
            ClothingSuggestion::LightJacket
        );
        assert_eq!(
            ClothingSuggestion::for_day(Condition::Cloudy, 60),
            ClothingSuggestion::WarmCoat
        );
    }

    #[test]
    fn test_mock_week_suggestions() {
        let week = crate::model::Forecast::mock();
        let activities: Vec<_> = week
            .days()
            .iter()
            .map(|d| ActivitySuggestion::for_day(d.condition, d.high))
            .collect();
        assert_eq!(
            activities,
            vec![
                ActivitySuggestion::Outdoors,
                ActivitySuggestion::Outdoors,
                ActivitySuggestion::Outdoors,
                ActivitySuggestion::Beach,
                ActivitySuggestion::Indoor,
                ActivitySuggestion::Indoor,
                ActivitySuggestion::Beach,
            ]
        );
        let sat = week.get(5).unwrap();
        assert_eq!(
            ClothingSuggestion::for_day(sat.condition, sat.high),
            ClothingSuggestion::LightJacket
        );
    }

    #[test]
    fn test_texts() {
        assert_eq!(
            ActivitySuggestion::Indoor.text(),
            "Great day for indoor activities: reading, movies, or board games!"
        );
        assert_eq!(
            ClothingSuggestion::WarmCoat.text(),
            "Warm coat, hat, and gloves recommended."
        );
    }

    fn dry_condition() -> impl Strategy<Value = Condition> {
        prop_oneof![
            Just(Condition::Sunny),
            Just(Condition::Cloudy),
            Just(Condition::PartlyCloudy),
            Just(Condition::Clear),
            Just(Condition::Windy),
            Just(Condition::Unrecognized),
        ]
    }

    proptest! {
        #[test]
        fn prop_dry_days_agree_on_temperature_band(c in dry_condition(), high in -40i32..130) {
            let activity = ActivitySuggestion::for_day(c, high);
            let clothing = ClothingSuggestion::for_day(c, high);
            let paired = matches!(
                (activity, clothing),
                (ActivitySuggestion::Beach, ClothingSuggestion::Light)
                    | (ActivitySuggestion::Outdoors, ClothingSuggestion::LightJacket)
                    | (ActivitySuggestion::Museum, ClothingSuggestion::WarmCoat)
            );
            prop_assert!(paired);
        }

        #[test]
        fn prop_rain_is_temperature_independent(high in any::<i32>()) {
            prop_assert_eq!(ActivitySuggestion::for_day(Condition::Rainy, high), ActivitySuggestion::Indoor);
            prop_assert_eq!(ClothingSuggestion::for_day(Condition::Rainy, high), ClothingSuggestion::Waterproof);
        }
    }
}
