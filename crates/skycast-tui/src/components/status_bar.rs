//! Status bar at the bottom of the TUI.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use skycast_core::weather::TimeOfDay;
use skycast_core::DashboardView;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub struct StatusBarComponent {
    /// Current status message.
    pub message: String,
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            message: "Press a or c to see ideas for the highlighted day.".to_string(),
        }
    }

    /// Short phase name for the pill badge.
    fn phase_badge(phase: TimeOfDay) -> &'static str {
        match phase {
            TimeOfDay::Sunrise => "Sunrise",
            TimeOfDay::Day => "Day",
            TimeOfDay::Sunset => "Sunset",
            TimeOfDay::Night => "Night",
            TimeOfDay::Unrecognized => "—",
        }
    }
}

impl Component for StatusBarComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        if let Action::SetStatus(msg) = action {
            self.message = msg.clone();
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let width = area.width as usize;

        // Right side: compact key hints
        let hints = "q·?·←→·a·c";
        let hints_len = hints.chars().count() + 1; // +1 for trailing space

        // Phase badge
        let badge = Self::phase_badge(view.time_of_day);
        let badge_len = badge.chars().count() + 2; // spaces around badge

        // Truncate message to remaining space
        let msg_budget = width
            .saturating_sub(badge_len)
            .saturating_sub(hints_len)
            .saturating_sub(4); // separators and spacing

        let msg = truncate(&self.message, msg_budget);

        // Pad to push hints to the right edge
        let used = badge_len + 2 + msg.chars().count();
        let pad = width.saturating_sub(used + hints_len);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", badge), Theme::header()),
            Span::styled("  ", Theme::dim()),
            Span::styled(msg, Theme::status_bar()),
            Span::raw(" ".repeat(pad)),
            Span::styled(hints, Theme::key_hint()),
            Span::raw(" "),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return String::new();
    }
    let head: String = s.chars().take(max_len - 3).collect();
    format!("{head}...")
}
