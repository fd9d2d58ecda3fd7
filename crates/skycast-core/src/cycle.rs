use serde::Serialize;

use crate::weather::TimeOfDay;

/// Cursor into [`TimeOfDay::SEQUENCE`] that wraps from night back to sunrise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseCycler {
    cursor: usize,
}

impl PhaseCycler {
    /// A cycler at index 0 (sunrise).
    pub fn new() -> Self {
        Self::default()
    }

    /// A cycler positioned on `phase`, so the next advance moves past it.
    /// Unrecognized phases start from index 0.
    pub fn starting_at(phase: TimeOfDay) -> Self {
        Self {
            cursor: phase.position().unwrap_or(0),
        }
    }

    /// Step one position forward.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            cursor: (self.cursor + 1) % TimeOfDay::SEQUENCE.len(),
        }
    }

    pub fn phase(&self) -> TimeOfDay {
        TimeOfDay::SEQUENCE[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
