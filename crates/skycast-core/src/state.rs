//! The widget's whole state and its pure transition function.
//!
//! All mutation goes through [`WidgetState::update`], which consumes the old
//! state and returns the next one. The clock ticker, the phase cycler and the
//! user's toggles are just different [`Msg`] values fed through it in order.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::SeedConfig;
use crate::cycle::PhaseCycler;
use crate::interaction::{InteractionState, SuggestionKind};
use crate::model::{CurrentConditions, Forecast};

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The clock ticker read a new wall-clock time.
    ClockTick(DateTime<Local>),
    /// The phase cycler fired.
    AdvancePhase,
    /// The user pressed a suggestion button on a forecast day.
    Toggle { kind: SuggestionKind, day: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetState {
    pub current: CurrentConditions,
    pub forecast: Forecast,
    pub interaction: InteractionState,
    pub cycler: PhaseCycler,
}

impl WidgetState {
    /// Session-start state from seed values and the mock forecast.
    pub fn from_seed(seed: &SeedConfig, now: DateTime<Local>) -> Self {
        Self::new(
            CurrentConditions {
                temperature: seed.temperature,
                condition: seed.condition,
                time_of_day: seed.time_of_day,
                observed_at: now,
            },
            Forecast::mock(),
        )
    }

    pub fn new(current: CurrentConditions, forecast: Forecast) -> Self {
        Self {
            cycler: PhaseCycler::starting_at(current.time_of_day),
            current,
            forecast,
            interaction: InteractionState::default(),
        }
    }

    /// Apply `msg` to a state held in place.
    ///
    /// Moves the state out through [`update`](Self::update) and back, leaving
    /// an allocation-free stand-in for the duration, so the forecast is never
    /// copied.
    pub fn step(&mut self, msg: Msg) {
        let stand_in = Self {
            current: self.current.clone(),
            forecast: Forecast::vacant(),
            interaction: self.interaction,
            cycler: self.cycler,
        };
        let prev = std::mem::replace(self, stand_in);
        *self = prev.update(msg);
    }

    #[must_use]
    pub fn update(self, msg: Msg) -> Self {
        match msg {
            Msg::ClockTick(now) => {
                trace!(%now, "Clock tick");
                Self {
                    current: CurrentConditions {
                        observed_at: now,
                        ..self.current
                    },
                    ..self
                }
            }
            Msg::AdvancePhase => {
                let cycler = self.cycler.advance();
                debug!(phase = %cycler.phase(), "Time of day advanced");
                Self {
                    current: CurrentConditions {
                        time_of_day: cycler.phase(),
                        ..self.current
                    },
                    cycler,
                    ..self
                }
            }
            Msg::Toggle { kind, day } => {
                if day >= self.forecast.len() {
                    debug!(day, "Ignoring toggle for a day outside the forecast");
                    return self;
                }
                let interaction = self.interaction.toggle(kind, day);
                debug!(
                    ?kind,
                    day,
                    expanded = ?interaction.register(kind).expanded(),
                    "Suggestion panel toggled"
                );
                Self {
                    interaction,
                    ..self
                }
            }
        }
    }
}
