//! The backdrop: gradient fill plus the sun, moon, stars, clouds, wind, rain
//! and lightning overlays. Which overlays appear comes from the view's
//! decorations; this component only owns animation time and star positions.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use std::time::Duration;

use skycast_core::DashboardView;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

/// One full lightning cycle.
const LIGHTNING_CYCLE_MS: u128 = 15_000;

/// Time for the sun to drift across the sky once.
const SUN_CROSSING_SECS: f32 = 120.0;

/// Star twinkle period.
const TWINKLE_MS: u128 = 2_000;

/// Cloud starting positions and crossing times, as fractions of the area.
const CLOUDS: [(f32, f32, f32); 3] = [
    (0.10, 0.15, 60.0),
    (0.60, 0.25, 80.0),
    (0.40, 0.10, 70.0),
];

const CLOUD_SHAPE: [&str; 2] = [" .-~~~-. ", "(_______)"];

/// A star placed somewhere in the upper half of the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position, `0.0..1.0`.
    pub x: f32,
    /// Vertical position, `0.0..0.5`.
    pub y: f32,
    pub bright: bool,
    /// Twinkle delay in milliseconds, `0..2000`.
    pub delay_ms: u32,
}

/// Scatter `count` stars at random.
pub fn scatter_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..0.5),
            bright: rng.random_range(0.5..1.0) >= 0.75,
            delay_ms: rng.random_range(0..2000),
        })
        .collect()
}

/// Whether the lightning overlay is lit at `elapsed`: two short flashes at
/// the start of every 15 second cycle.
pub fn lightning_flash(elapsed: Duration) -> bool {
    let pct = elapsed.as_millis() % LIGHTNING_CYCLE_MS * 100 / LIGHTNING_CYCLE_MS;
    pct == 1 || pct == 9
}

pub struct SkyComponent {
    stars: Vec<Star>,
    star_count: usize,
    tick: Duration,
    elapsed: Duration,
}

impl SkyComponent {
    pub fn new(star_count: usize, tick: Duration) -> Self {
        Self {
            stars: scatter_stars(&mut rand::rng(), star_count),
            star_count,
            tick,
            elapsed: Duration::ZERO,
        }
    }

    /// Throw the stars somewhere new. Called each time night falls.
    pub fn rescatter_stars(&mut self) {
        self.stars = scatter_stars(&mut rand::rng(), self.star_count);
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn paint_gradient(&self, buf: &mut Buffer, area: Rect, view: &DashboardView) {
        let w = area.width.max(1) as f32;
        let h = area.height.max(1) as f32;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let fx = (x - area.x) as f32 / w;
                let fy = (y - area.y) as f32 / h;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(Theme::sky_at(view.background, fx, fy));
                }
            }
        }
    }

    fn paint_flash(&self, buf: &mut Buffer, area: Rect) {
        buf.set_style(area, Style::default().bg(Theme::lightning()));
    }

    fn draw_sun(&self, buf: &mut Buffer, area: Rect) {
        let drift = self.elapsed.as_secs_f32() / SUN_CROSSING_SECS;
        let x = (0.2 + drift).fract();
        let style = Style::default()
            .fg(Theme::sun())
            .add_modifier(Modifier::BOLD);
        put(buf, area, x, 0.2, "☀", style);
    }

    fn draw_moon(&self, buf: &mut Buffer, area: Rect) {
        let style = Style::default()
            .fg(Theme::moon())
            .add_modifier(Modifier::BOLD);
        put(buf, area, 0.8, 0.2, "☾", style);
    }

    fn draw_stars(&self, buf: &mut Buffer, area: Rect) {
        let now = self.elapsed.as_millis();
        for star in &self.stars {
            let lit = (now + star.delay_ms as u128) % TWINKLE_MS < TWINKLE_MS / 2;
            let (symbol, color) = match (star.bright, lit) {
                (true, true) => ("✦", Theme::star()),
                (_, true) => ("·", Theme::star()),
                _ => ("·", Theme::star_faint()),
            };
            put(buf, area, star.x, star.y, symbol, Style::default().fg(color));
        }
    }

    fn draw_clouds(&self, buf: &mut Buffer, area: Rect) {
        let style = Style::default().fg(Theme::cloud());
        for (start_x, y, crossing_secs) in CLOUDS {
            let x = (start_x + self.elapsed.as_secs_f32() / crossing_secs).fract();
            let row = area.y + (y * area.height as f32) as u16;
            for (i, line) in CLOUD_SHAPE.iter().enumerate() {
                let at = Rect {
                    y: row.saturating_add(i as u16),
                    ..area
                };
                put(buf, at, x, 0.0, line, style);
            }
        }
    }

    fn draw_wind(&self, buf: &mut Buffer, area: Rect) {
        let shift = (self.elapsed.as_millis() / 200) as usize;
        let style = Style::default().fg(Theme::wind());
        for y in area.top()..area.bottom() {
            if y % 5 != 2 {
                continue;
            }
            for x in area.left()..area.right() {
                if (x as usize + shift + y as usize * 3) % 17 < 3 {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol("~").set_style(style);
                    }
                }
            }
        }
    }

    fn draw_rain(&self, buf: &mut Buffer, area: Rect) {
        let offset = (self.elapsed.as_millis() / 100) as usize % 9;
        let style = Style::default().fg(Theme::rain());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if y % 2 == 0 && (x as usize + y as usize + offset) % 9 == 0 {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol("╱").set_style(style);
                    }
                }
            }
        }
    }
}

/// Write `text` at a fractional position inside `area`, clipped to it.
fn put(buf: &mut Buffer, area: Rect, fx: f32, fy: f32, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let x = area.x + ((fx * area.width as f32) as u16).min(area.width - 1);
    let y = area.y + ((fy * area.height as f32) as u16).min(area.height - 1);
    if y >= buf.area.bottom() {
        return;
    }
    let room = (area.right() - x) as usize;
    buf.set_stringn(x, y, text, room, style);
}

impl Component for SkyComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        if let Action::Tick = action {
            self.elapsed += self.tick;
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let deco = view.decorations;
        let buf = frame.buffer_mut();

        if deco.thunder && lightning_flash(self.elapsed) {
            self.paint_flash(buf, area);
        } else {
            self.paint_gradient(buf, area, view);
        }

        if deco.sun {
            self.draw_sun(buf, area);
        }
        if deco.stars {
            self.draw_stars(buf, area);
        }
        if deco.moon {
            self.draw_moon(buf, area);
        }
        if deco.clouds {
            self.draw_clouds(buf, area);
        }
        if deco.wind {
            self.draw_wind(buf, area);
        }
        if deco.rain {
            self.draw_rain(buf, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use skycast_core::clock::ClockFormat;
    use skycast_core::config::SeedConfig;
    use skycast_core::weather::{Condition, TimeOfDay};
    use skycast_core::WidgetState;

    fn view(time_of_day: TimeOfDay, condition: Condition) -> DashboardView {
        let seed = SeedConfig {
            time_of_day,
            condition,
            ..SeedConfig::default()
        };
        let state = WidgetState::from_seed(&seed, chrono::Local::now());
        DashboardView::build(&state, ClockFormat::TwelveHour)
    }

    fn screen(sky: &SkyComponent, view: &DashboardView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| sky.render(frame, frame.area(), view))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_scatter_stars_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = scatter_stars(&mut rng, 20);
        assert_eq!(stars.len(), 20);
        for s in &stars {
            assert!((0.0..1.0).contains(&s.x));
            assert!((0.0..0.5).contains(&s.y));
            assert!(s.delay_ms < 2000);
        }
    }

    #[test]
    fn test_lightning_flash_windows() {
        assert!(!lightning_flash(Duration::from_millis(0)));
        assert!(lightning_flash(Duration::from_millis(200)));
        assert!(!lightning_flash(Duration::from_millis(400)));
        assert!(lightning_flash(Duration::from_millis(1400)));
        assert!(!lightning_flash(Duration::from_millis(1600)));
        assert!(lightning_flash(Duration::from_millis(15_200)));
    }

    #[test]
    fn test_tick_advances_animation_clock() {
        let mut sky = SkyComponent::new(5, Duration::from_millis(100));
        sky.handle_action(&Action::Tick);
        sky.handle_action(&Action::Tick);
        sky.handle_action(&Action::AdvancePhase);
        assert_eq!(sky.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn test_resize_leaves_animation_clock_alone() {
        let mut sky = SkyComponent::new(5, Duration::from_millis(100));
        sky.handle_action(&Action::Tick);
        for _ in 0..50 {
            sky.handle_action(&Action::Resize);
        }
        assert_eq!(sky.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_day_sky_draws_sun_only() {
        let sky = SkyComponent::new(20, Duration::from_millis(100));
        let text = screen(&sky, &view(TimeOfDay::Day, Condition::Sunny));
        assert!(text.contains('☀'));
        assert!(!text.contains('☾'));
    }

    #[test]
    fn test_night_sky_draws_moon() {
        let sky = SkyComponent::new(20, Duration::from_millis(100));
        let text = screen(&sky, &view(TimeOfDay::Night, Condition::Clear));
        assert!(text.contains('☾'));
        assert!(!text.contains('☀'));
    }

    #[test]
    fn test_weather_overlays() {
        let sky = SkyComponent::new(0, Duration::from_millis(100));
        assert!(screen(&sky, &view(TimeOfDay::Sunset, Condition::Rainy)).contains('╱'));
        assert!(screen(&sky, &view(TimeOfDay::Sunset, Condition::Windy)).contains('~'));
        assert!(
            screen(&sky, &view(TimeOfDay::Sunset, Condition::Cloudy)).contains("(_______)")
        );
    }

    #[test]
    fn test_rescatter_keeps_count() {
        let mut sky = SkyComponent::new(12, Duration::from_millis(100));
        sky.rescatter_stars();
        assert_eq!(sky.stars().len(), 12);
    }
}
