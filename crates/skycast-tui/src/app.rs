//! Main application state and render loop.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use skycast_core::clock::{SystemClock, TimeSource};
use skycast_core::interaction::SuggestionKind;
use skycast_core::weather::TimeOfDay;
use skycast_core::{DashboardView, Msg, SkycastConfig, WidgetState};

use crate::action::Action;
use crate::components::clock::ClockComponent;
use crate::components::current::CurrentWeatherComponent;
use crate::components::forecast::ForecastComponent;
use crate::components::help::HelpComponent;
use crate::components::sky::SkyComponent;
use crate::components::status_bar::StatusBarComponent;
use crate::components::Component;
use crate::event::EventHandler;
use crate::ticker::PeriodicTask;

/// Puts the terminal into raw mode on the alternate screen, and restores it
/// when dropped, whichever way `run` exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = restore_screen(&mut io::stdout()) {
            tracing::warn!("Failed to restore the screen: {}", e);
        }
    }
}

/// Leave the alternate screen and bring the cursor back.
fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Main application state.
pub struct App {
    config: SkycastConfig,
    /// The weather widget's state. Only replaced through [`WidgetState::update`].
    state: WidgetState,
    /// Where the clock ticker reads time from.
    time_source: Arc<dyn TimeSource>,
    /// Whether the app should exit.
    should_quit: bool,

    // Components
    sky: SkyComponent,
    clock: ClockComponent,
    current: CurrentWeatherComponent,
    forecast: ForecastComponent,
    status_bar: StatusBarComponent,
    help: HelpComponent,
}

impl App {
    pub fn new(config: SkycastConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemClock))
    }

    pub fn with_time_source(config: SkycastConfig, time_source: Arc<dyn TimeSource>) -> Self {
        let state = WidgetState::from_seed(&config.seed, time_source.now());
        Self {
            sky: SkyComponent::new(config.display.star_count, config.timers.render_tick()),
            clock: ClockComponent::new(),
            current: CurrentWeatherComponent::new(),
            forecast: ForecastComponent::new(),
            status_bar: StatusBarComponent::new(),
            help: HelpComponent::new(),
            config,
            state,
            time_source,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.state, self.config.display.clock_format)
    }

    /// Run the TUI application.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Set up terminal. The guard restores it on every exit path.
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        // Create the action channel.
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

        // Start the event handler.
        let event_handler = EventHandler::new(tx.clone(), self.config.timers.render_tick());
        let events = tokio::spawn(async move {
            event_handler.run().await;
        });

        // Start both timers. Dropping them cancels them, so an early return
        // below still stops the ticking.
        let source = Arc::clone(&self.time_source);
        let clock_ticker = PeriodicTask::spawn(
            "clock",
            self.config.timers.clock_interval(),
            tx.clone(),
            move || Action::ClockTick(source.now()),
        );
        let phase_cycler = PeriodicTask::spawn(
            "phase",
            self.config.timers.phase_interval(),
            tx,
            || Action::AdvancePhase,
        );

        info!(
            phase = %self.state.current.time_of_day,
            condition = %self.state.current.condition,
            "Session started"
        );

        // Main loop.
        loop {
            // Render.
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            // Process actions.
            match rx.recv().await {
                Some(action) => {
                    self.handle_action(&action);
                    if self.should_quit {
                        break;
                    }
                }
                None => break,
            }
        }

        // Tear down the timers before the state goes away.
        clock_ticker.stop().await;
        phase_cycler.stop().await;
        events.abort();

        info!("Session ended");
        Ok(())
    }

    fn apply(&mut self, msg: Msg) {
        self.state.step(msg);
    }

    /// Dispatch an action to the state and all components.
    fn handle_action(&mut self, action: &Action) {
        // Global actions first.
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ClockTick(now) => self.apply(Msg::ClockTick(*now)),
            Action::AdvancePhase => {
                self.apply(Msg::AdvancePhase);
                let phase = self.state.current.time_of_day;
                if phase == TimeOfDay::Night {
                    self.sky.rescatter_stars();
                }
            }
            Action::ToggleDay { kind, day } => {
                self.apply(Msg::Toggle {
                    kind: *kind,
                    day: *day,
                });
                if let Some(status) = self.toggle_status(*kind, *day) {
                    self.status_bar.handle_action(&Action::SetStatus(status));
                }
            }
            _ => {}
        }

        // While help is open, the key that closes it goes nowhere else.
        let help_was_open = self.help.visible;
        self.help.handle_action(action);
        let result = if help_was_open && action.is_user_input() {
            None
        } else {
            self.forecast.handle_action(action)
        };

        self.sky.handle_action(action);
        self.status_bar.handle_action(action);

        // Handle chained actions from components.
        if let Some(chained) = result {
            self.handle_action(&chained);
        }
    }

    fn toggle_status(&self, kind: SuggestionKind, day: usize) -> Option<String> {
        let label = &self.state.forecast.get(day)?.label;
        let shown = self.state.interaction.register(kind).is_expanded(day);
        let what = match kind {
            SuggestionKind::Activity => "activity ideas",
            SuggestionKind::Clothing => "clothing advice",
        };
        Some(if shown {
            format!("{label}: showing {what}")
        } else {
            format!("{label}: {what} hidden")
        })
    }

    fn render(&self, frame: &mut Frame) {
        let view = self.view();
        let area = frame.area();

        self.sky.render(frame, area, &view);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Clock
            Constraint::Length(3), // Current weather
            Constraint::Min(12),   // Forecast
            Constraint::Length(1), // Status bar
        ])
        .horizontal_margin(2)
        .split(area);

        self.clock.render(frame, chunks[0], &view);
        self.current.render(frame, chunks[1], &view);
        self.forecast.render(frame, chunks[2], &view);
        self.status_bar.render(frame, chunks[3], &view);

        // Overlay.
        self.help.render(frame, area, &view);
    }
}
