//! Seven-day forecast strip. Each card carries an "Activities" and a
//! "Clothing" button; pressing one toggles that day's suggestion panel.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use skycast_core::interaction::SuggestionKind;
use skycast_core::model::FORECAST_DAYS;
use skycast_core::view::ForecastCard;
use skycast_core::DashboardView;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub struct ForecastComponent {
    /// Day under the cursor.
    pub selected: usize,
}

impl ForecastComponent {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, index: usize, card: &ForecastCard) {
        let is_selected = index == self.selected;
        let block = Block::default()
            .title(format!(" {} ", card.label))
            .title_alignment(Alignment::Center)
            .title_style(if is_selected {
                Theme::selected()
            } else {
                Theme::title()
            })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if is_selected {
                Style::default().fg(Theme::accent())
            } else {
                Theme::card_border()
            });

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{}° / {}°", card.high, card.low),
                Theme::normal(),
            )),
            Line::from(Span::styled(card.icon.glyph(), Theme::header())),
            Line::from(""),
            button_line(SuggestionKind::Activity, card.activity_expanded),
            button_line(SuggestionKind::Clothing, card.clothing_expanded),
        ];

        for text in [card.activity, card.clothing].into_iter().flatten() {
            lines.push(Line::from(Span::styled("─".repeat(6), Theme::muted())));
            lines.push(Line::from(Span::styled(text, Theme::suggestion())));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

fn button_line(kind: SuggestionKind, active: bool) -> Line<'static> {
    Line::from(Span::styled(
        format!("[{}]", kind.label()),
        Theme::button(active),
    ))
}

impl Component for ForecastComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::SelectNextDay => {
                if self.selected + 1 < FORECAST_DAYS {
                    self.selected += 1;
                }
                None
            }
            Action::SelectPrevDay => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::SelectDay(day) => {
                if *day < FORECAST_DAYS {
                    self.selected = *day;
                }
                None
            }
            Action::ToggleSuggestion(kind) => Some(Action::ToggleDay {
                kind: *kind,
                day: self.selected,
            }),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let count = view.cards.len().max(1) as u32;
        let columns = Layout::horizontal(
            (0..count).map(|_| Constraint::Ratio(1, count)),
        )
        .spacing(1)
        .split(area);

        for (i, (card, column)) in view.cards.iter().zip(columns.iter()).enumerate() {
            self.render_card(frame, *column, i, card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut forecast = ForecastComponent::new();
        forecast.handle_action(&Action::SelectPrevDay);
        assert_eq!(forecast.selected, 0);

        for _ in 0..20 {
            forecast.handle_action(&Action::SelectNextDay);
        }
        assert_eq!(forecast.selected, FORECAST_DAYS - 1);

        forecast.handle_action(&Action::SelectDay(2));
        assert_eq!(forecast.selected, 2);
        forecast.handle_action(&Action::SelectDay(9));
        assert_eq!(forecast.selected, 2);
    }

    #[test]
    fn test_toggle_targets_selected_day() {
        let mut forecast = ForecastComponent::new();
        forecast.handle_action(&Action::SelectDay(4));
        let chained = forecast.handle_action(&Action::ToggleSuggestion(SuggestionKind::Clothing));
        assert_eq!(
            chained,
            Some(Action::ToggleDay {
                kind: SuggestionKind::Clothing,
                day: 4
            })
        );
    }
}
