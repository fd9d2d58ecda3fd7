//! Read-only projection of [`WidgetState`] into everything the renderer
//! needs. Building a view never mutates state.

use serde::Serialize;

use crate::appearance::{Background, Decorations, Icon};
use crate::clock::ClockFormat;
use crate::state::WidgetState;
use crate::suggest::{ActivitySuggestion, ClothingSuggestion};
use crate::weather::{Condition, TimeOfDay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub clock: String,
    pub time_of_day: TimeOfDay,
    pub background: Background,
    pub decorations: Decorations,
    pub temperature: i32,
    pub condition: Condition,
    pub cards: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    pub label: String,
    pub high: i32,
    pub low: i32,
    pub icon: Icon,
    pub activity_expanded: bool,
    pub clothing_expanded: bool,
    /// Present only while the activity panel is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<&'static str>,
    /// Present only while the clothing panel is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clothing: Option<&'static str>,
}

impl DashboardView {
    pub fn build(state: &WidgetState, clock_format: ClockFormat) -> Self {
        let current = &state.current;
        let interaction = &state.interaction;

        let cards = state
            .forecast
            .days()
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let activity_expanded = interaction.activity.is_expanded(i);
                let clothing_expanded = interaction.clothing.is_expanded(i);
                ForecastCard {
                    label: day.label.clone(),
                    high: day.high,
                    low: day.low,
                    icon: Icon::for_condition(day.condition),
                    activity_expanded,
                    clothing_expanded,
                    activity: activity_expanded
                        .then(|| ActivitySuggestion::for_day(day.condition, day.high).text()),
                    clothing: clothing_expanded
                        .then(|| ClothingSuggestion::for_day(day.condition, day.high).text()),
                }
            })
            .collect();

        Self {
            clock: clock_format.format(&current.observed_at),
            time_of_day: current.time_of_day,
            background: Background::for_phase(current.time_of_day),
            decorations: Decorations::for_sky(current.time_of_day, current.condition),
            temperature: current.temperature,
            condition: current.condition,
            cards,
        }
    }

    /// Pretty JSON, as printed by `skycast --snapshot`.
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
