//! Help overlay — keybinding reference.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use skycast_core::DashboardView;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub struct HelpComponent {
    pub visible: bool,
}

impl HelpComponent {
    pub fn new() -> Self {
        Self { visible: false }
    }

    fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(area);

        let horizontal = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(vertical[1]);

        horizontal[1]
    }
}

impl Component for HelpComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ToggleHelp => {
                self.visible = !self.visible;
                None
            }
            // Any key closes help; timers and render ticks don't.
            _ if self.visible && action.is_user_input() => {
                self.visible = false;
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _view: &DashboardView) {
        if !self.visible {
            return;
        }

        let dialog = Self::centered_rect(area, 50, 16);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .title(" Help — Keybindings ")
            .title_style(Theme::selected())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::accent()))
            .style(Style::default().bg(Color::Rgb(25, 25, 40)));

        let help_text = vec![
            Line::from(""),
            key_line("q / Ctrl+C", "Quit"),
            key_line("?", "Toggle this help"),
            key_line("Esc", "Close help"),
            key_line("Left / Right / h / l", "Previous / next day"),
            key_line("Tab / Shift+Tab", "Next / previous day"),
            key_line("1-7", "Jump to day"),
            key_line("a / Enter", "Toggle activity ideas"),
            key_line("c", "Toggle clothing advice"),
            Line::from(""),
            Line::from(Span::styled(
                "  The sky moves on by itself every 8 seconds.",
                Theme::muted(),
            )),
        ];

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, dialog);
    }
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<22}", key), Theme::selected()),
        Span::styled(desc, Theme::normal()),
    ])
}
