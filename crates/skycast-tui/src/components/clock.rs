//! Clock pill in the top-left corner.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use skycast_core::DashboardView;

use crate::components::Component;
use crate::theme::Theme;

pub struct ClockComponent;

impl ClockComponent {
    pub fn new() -> Self {
        Self
    }

    /// Width the pill needs for `text`, borders and padding included.
    pub fn width_for(text: &str) -> u16 {
        text.chars().count() as u16 + 4
    }
}

impl Component for ClockComponent {
    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let width = Self::width_for(&view.clock).min(area.width);
        let pill = Rect {
            width,
            height: area.height.min(3),
            ..area
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border());

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(view.clock.as_str(), Theme::title()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), pill);
    }
}
