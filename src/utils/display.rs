//! Text rendering of timer snapshots for the terminal

use crate::{
    engine::TimerConfig,
    state::{Phase, TimerState},
};

use super::Locale;

/// Format seconds as `mm:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Share of the current phase still to go, 0-100
pub fn progress_percent(remaining: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = u64::from(remaining) * 100 / u64::from(total);
    percent.min(100) as u32
}

/// One line describing `state` for the terminal presentation
pub fn render_state(state: &TimerState, config: &TimerConfig, locale: Locale) -> String {
    match state.phase {
        Phase::Initial => format!("{}... {}", locale.get_ready(), state.remaining_seconds),
        Phase::Round => format!(
            "{} ({} / {})  {}  [{:>3}%]",
            locale.round_title(state.completed_rounds),
            state.completed_rounds,
            config.round_count,
            format_clock(state.remaining_seconds),
            progress_percent(state.remaining_seconds, config.round_duration_seconds),
        ),
        Phase::Rest => format!(
            "{}  {}  [{:>3}%]",
            locale.rest_title(),
            format_clock(state.remaining_seconds),
            progress_percent(state.remaining_seconds, config.rest_duration_seconds),
        ),
        Phase::Finished => format!(
            "{}: {}",
            locale.training_complete(),
            locale.round_title(state.completed_rounds)
        ),
    }
}

/// Summary of a config, as shown before a session starts
pub fn describe_config(config: &TimerConfig, locale: Locale) -> String {
    format!(
        "{} x {} / {}",
        config.round_count,
        format_clock(config.round_duration_seconds),
        locale.seconds(config.rest_duration_seconds)
    )
}
