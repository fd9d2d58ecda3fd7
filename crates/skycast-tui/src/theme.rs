//! Color scheme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};
use skycast_core::appearance::{Background, Rgb};

/// The color palette for skycast's TUI.
///
/// Everything is drawn on top of a sky gradient, so foreground colors are
/// light and translucent-looking rather than the usual dim greys.
pub struct Theme;

impl Theme {
    // ── Base colors ─────────────────────────────────────────
    pub fn fg() -> Color {
        Color::Rgb(255, 255, 255)
    }

    pub fn fg_dim() -> Color {
        Color::Rgb(220, 225, 240)
    }

    pub fn fg_muted() -> Color {
        Color::Rgb(190, 195, 215)
    }

    // ── Accent colors ───────────────────────────────────────
    pub fn accent() -> Color {
        Color::Rgb(255, 236, 140)
    }

    // ── Sky decorations ─────────────────────────────────────
    pub fn sun() -> Color {
        Color::Rgb(255, 204, 0)
    }

    pub fn moon() -> Color {
        Color::Rgb(245, 245, 245)
    }

    pub fn star() -> Color {
        Color::Rgb(255, 255, 255)
    }

    pub fn star_faint() -> Color {
        Color::Rgb(170, 170, 200)
    }

    pub fn cloud() -> Color {
        Color::Rgb(240, 240, 245)
    }

    pub fn rain() -> Color {
        Color::Rgb(200, 220, 255)
    }

    pub fn wind() -> Color {
        Color::Rgb(230, 240, 250)
    }

    pub fn lightning() -> Color {
        Color::Rgb(250, 250, 255)
    }

    // ── Structural colors ───────────────────────────────────
    pub fn border_color() -> Color {
        Color::Rgb(235, 235, 245)
    }

    pub fn card_border_color() -> Color {
        Color::Rgb(200, 210, 230)
    }

    // ── Background gradient ─────────────────────────────────

    pub fn rgb((r, g, b): Rgb) -> Color {
        Color::Rgb(r, g, b)
    }

    /// Linear blend between two stops, `t` clamped to `0.0..=1.0`.
    pub fn blend(from: Rgb, to: Rgb, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
    }

    /// Color of a cell at fractional position `(x, y)` of the 135° gradient.
    pub fn sky_at(background: Background, x: f32, y: f32) -> Color {
        let (from, to) = background.stops();
        Self::blend(from, to, (x + y) / 2.0)
    }

    // ── Composite styles ────────────────────────────────────

    pub fn title() -> Style {
        Style::default().fg(Self::fg()).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::fg()).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::fg())
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::fg_dim())
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::fg_muted())
    }

    pub fn border() -> Style {
        Style::default().fg(Self::border_color())
    }

    pub fn card_border() -> Style {
        Style::default().fg(Self::card_border_color())
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::accent())
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::fg_muted())
    }

    pub fn button(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Rgb(30, 30, 50))
                .bg(Color::Rgb(235, 235, 245))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::fg())
        }
    }

    pub fn suggestion() -> Style {
        Style::default()
            .fg(Self::fg())
            .add_modifier(Modifier::ITALIC)
    }
}
