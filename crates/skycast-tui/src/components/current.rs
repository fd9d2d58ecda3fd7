//! Headline: current temperature and condition.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use skycast_core::DashboardView;

use crate::components::Component;
use crate::theme::Theme;

pub struct CurrentWeatherComponent;

impl CurrentWeatherComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for CurrentWeatherComponent {
    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{}°", view.temperature),
                Theme::title().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(view.condition.title(), Theme::header())),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
