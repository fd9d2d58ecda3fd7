use chrono::{Duration, Local};

use skycast_core::appearance::Background;
use skycast_core::clock::ClockFormat;
use skycast_core::config::SeedConfig;
use skycast_core::interaction::SuggestionKind;
use skycast_core::weather::TimeOfDay;
use skycast_core::{DashboardView, Msg, WidgetState};

#[test]
fn day_advances_to_sunset_with_dusk_background() {
    let state = WidgetState::from_seed(&SeedConfig::default(), Local::now());
    assert_eq!(state.current.time_of_day, TimeOfDay::Day);

    let state = state.update(Msg::AdvancePhase);
    assert_eq!(state.current.time_of_day, TimeOfDay::Sunset);

    let view = DashboardView::build(&state, ClockFormat::TwelveHour);
    assert_eq!(view.background, Background::Dusk);
    assert!(!view.decorations.sun);
}

#[test]
fn full_night_cycle_returns_to_day() {
    let mut state = WidgetState::from_seed(&SeedConfig::default(), Local::now());
    let mut phases = Vec::new();
    for _ in 0..4 {
        state = state.update(Msg::AdvancePhase);
        phases.push(state.current.time_of_day);
    }
    assert_eq!(
        phases,
        vec![
            TimeOfDay::Sunset,
            TimeOfDay::Night,
            TimeOfDay::Sunrise,
            TimeOfDay::Day
        ]
    );
}

#[test]
fn interleaved_ticks_and_toggles() {
    let start = Local::now();
    let mut state = WidgetState::from_seed(&SeedConfig::default(), start);
    let mut last = state.current.observed_at;

    for second in 1..=16 {
        let before = state.current.clone();
        state = state.update(Msg::ClockTick(start + Duration::seconds(second)));
        assert!(state.current.observed_at > last);
        assert_eq!(state.current.temperature, before.temperature);
        assert_eq!(state.current.condition, before.condition);
        assert_eq!(state.current.time_of_day, before.time_of_day);
        last = state.current.observed_at;

        if second % 8 == 0 {
            state = state.update(Msg::AdvancePhase);
        }
        if second == 3 {
            state = state.update(Msg::Toggle {
                kind: SuggestionKind::Activity,
                day: 4,
            });
        }
    }

    assert_eq!(state.current.time_of_day, TimeOfDay::Night);
    let view = DashboardView::build(&state, ClockFormat::TwelveHour);
    assert_eq!(view.background, Background::Midnight);
    assert!(view.decorations.moon && view.decorations.stars);
    assert!(view.cards[4].activity_expanded);
    assert!(view.cards[4]
        .activity
        .is_some_and(|text| text.contains("indoor")));
}
