//! Component trait and all TUI components.
//!
//! Each component encapsulates rendering and input handling for one part of
//! the screen. Weather data comes from the shared [`DashboardView`]; the
//! components only keep view-local state such as the day cursor.

pub mod clock;
pub mod current;
pub mod forecast;
pub mod help;
pub mod sky;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::Frame;
use skycast_core::DashboardView;

use crate::action::Action;

/// Trait implemented by all TUI components.
pub trait Component {
    /// Handle an action and optionally return a new action to dispatch.
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        let _ = action;
        None
    }

    /// Render the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView);
}
