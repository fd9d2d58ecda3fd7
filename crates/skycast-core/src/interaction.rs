//! Which forecast day, if any, has its suggestion panel expanded.

use serde::Serialize;

/// The two independent suggestion panels on every forecast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Activity,
    Clothing,
}

impl SuggestionKind {
    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Activity => "Activities",
            SuggestionKind::Clothing => "Clothing",
        }
    }
}

/// A single-slot toggle: at most one day expanded at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToggleRegister(Option<usize>);

impl ToggleRegister {
    /// Selecting the expanded day collapses it, any other day replaces it.
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        if self.0 == Some(index) {
            ToggleRegister(None)
        } else {
            ToggleRegister(Some(index))
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.0
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.0 == Some(index)
    }
}

/// Both toggle registers. They never influence each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    pub activity: ToggleRegister,
    pub clothing: ToggleRegister,
}

impl InteractionState {
    #[must_use]
    pub fn toggle(self, kind: SuggestionKind, index: usize) -> Self {
        match kind {
            SuggestionKind::Activity => Self {
                activity: self.activity.select(index),
                ..self
            },
            SuggestionKind::Clothing => Self {
                clothing: self.clothing.select(index),
                ..self
            },
        }
    }

    pub fn register(&self, kind: SuggestionKind) -> ToggleRegister {
        match kind {
            SuggestionKind::Activity => self.activity,
            SuggestionKind::Clothing => self.clothing,
        }
    }
}
