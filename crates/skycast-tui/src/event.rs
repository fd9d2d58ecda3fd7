//! Terminal event handling: captures keyboard and resize events from
//! crossterm and dispatches them as Actions, interleaved with render ticks.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use skycast_core::interaction::SuggestionKind;
use skycast_core::model::FORECAST_DAYS;

use crate::action::Action;

/// How long one blocking read waits before giving the loop a chance to exit.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Where terminal events come from.
pub trait EventSource: Send + Sync + 'static {
    /// Wait up to `timeout` for the next event.
    fn next_event(&self, timeout: Duration) -> Option<Event>;
}

/// The real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&self, timeout: Duration) -> Option<Event> {
        if event::poll(timeout).unwrap_or(false) {
            event::read().ok()
        } else {
            None
        }
    }
}

/// Event loop that reads terminal events and sends Actions.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Action>,
    tick_rate: Duration,
    source: Arc<dyn EventSource>,
}

impl EventHandler {
    pub fn new(tx: mpsc::UnboundedSender<Action>, tick_rate: Duration) -> Self {
        Self::with_source(tx, tick_rate, Arc::new(CrosstermEvents))
    }

    pub fn with_source(
        tx: mpsc::UnboundedSender<Action>,
        tick_rate: Duration,
        source: Arc<dyn EventSource>,
    ) -> Self {
        Self {
            tx,
            tick_rate,
            source,
        }
    }

    /// Run the event loop. This blocks and should be spawned in a task.
    ///
    /// At most one blocking read is in flight. A render tick never abandons
    /// it; the same read is awaited again on the next turn, so an event it
    /// picks up is always delivered.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.tick_rate);
        let mut pending: Option<JoinHandle<Option<Event>>> = None;

        loop {
            let read = pending.get_or_insert_with(|| {
                let source = Arc::clone(&self.source);
                tokio::task::spawn_blocking(move || source.next_event(POLL_TIMEOUT))
            });

            let finished = tokio::select! {
                _ = interval.tick() => None,
                result = read => Some(result),
            };

            let action = match finished {
                None => Some(Action::Tick),
                Some(result) => {
                    pending = None;
                    match result {
                        Ok(Some(event)) => map_event(event),
                        _ => None,
                    }
                }
            };

            if let Some(action) = action {
                if self.tx.send(action).is_err() {
                    break;
                }
            }
        }
    }
}

fn map_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(_, _) => Some(Action::Resize),
        _ => None,
    }
}

/// Global key map. There are no text fields, so every key is a shortcut.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::CloseOverlay),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::SelectNextDay),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::SelectPrevDay),
        KeyCode::Char('a') | KeyCode::Enter => {
            Some(Action::ToggleSuggestion(SuggestionKind::Activity))
        }
        KeyCode::Char('c') => Some(Action::ToggleSuggestion(SuggestionKind::Clothing)),

        // Number keys jump straight to a day.
        KeyCode::Char(c @ '1'..='9') => {
            let day = c as usize - '1' as usize;
            (day < FORECAST_DAYS).then_some(Action::SelectDay(day))
        }

        _ => None,
    }
}
