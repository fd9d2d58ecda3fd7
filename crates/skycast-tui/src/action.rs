//! Action enum: the central message bus for the TUI.
//! Key presses and both periodic timers flow through here, one at a time.

use chrono::{DateTime, Local};
use skycast_core::interaction::SuggestionKind;

/// Every possible action that can occur in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Global ──────────────────────────────────────────────
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Close whatever overlay is open.
    CloseOverlay,
    /// Display a status message in the status bar.
    SetStatus(String),
    /// A render tick for animations.
    Tick,
    /// The terminal changed size. Only triggers a redraw.
    Resize,

    // ── Timers ──────────────────────────────────────────────
    /// The clock ticker read a new wall-clock time.
    ClockTick(DateTime<Local>),
    /// The phase cycler fired.
    AdvancePhase,

    // ── Forecast ────────────────────────────────────────────
    /// Move the day cursor right.
    SelectNextDay,
    /// Move the day cursor left.
    SelectPrevDay,
    /// Jump the day cursor to a forecast index.
    SelectDay(usize),
    /// Press a suggestion button on the day under the cursor.
    ToggleSuggestion(SuggestionKind),
    /// Press a suggestion button on a specific day.
    ToggleDay { kind: SuggestionKind, day: usize },
}

impl Action {
    /// Whether the action came from the keyboard rather than a timer.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Action::Tick
                | Action::Resize
                | Action::ClockTick(_)
                | Action::AdvancePhase
                | Action::SetStatus(_)
        )
    }
}
