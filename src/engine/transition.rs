//! Pure phase transition function
//!
//! Runs when the remaining seconds of a phase reach zero. It never touches
//! collaborators; it only describes what should happen as a list of effects.

use crate::state::{Phase, TimerState};

use super::{SoundKind, TimerConfig};

/// Side effect requested by a transition, applied by the engine in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlaySound(SoundKind),
    PresentNotification { round: u32 },
    DismissNotification,
    CancelTick,
}

/// Compute the phase that follows an expired one.
///
/// # Panics
///
/// Panics when called on a finished timer: nothing follows the terminal
/// phase, so reaching here means a tick was delivered that should not exist.
pub fn transition(state: &TimerState, config: &TimerConfig) -> (TimerState, Vec<Effect>) {
    debug_assert_eq!(state.remaining_seconds, 0, "transition before the phase expired");

    match state.phase {
        Phase::Initial => start_round(state, config),
        Phase::Round => (
            TimerState {
                phase: Phase::Rest,
                remaining_seconds: config.rest_duration_seconds,
                completed_rounds: state.completed_rounds,
            },
            vec![Effect::PlaySound(SoundKind::RestStart)],
        ),
        // A round is always followed by its rest, including the last one,
        // so the session ends only when a rest expires.
        Phase::Rest if state.completed_rounds < config.round_count => start_round(state, config),
        Phase::Rest => (
            TimerState::finished(state.completed_rounds),
            vec![
                Effect::PlaySound(SoundKind::RoundEnd),
                Effect::DismissNotification,
                Effect::CancelTick,
            ],
        ),
        Phase::Finished => panic!("transition requested for a finished timer"),
    }
}

fn start_round(state: &TimerState, config: &TimerConfig) -> (TimerState, Vec<Effect>) {
    let round = state.completed_rounds + 1;
    (
        TimerState {
            phase: Phase::Round,
            remaining_seconds: config.round_duration_seconds,
            completed_rounds: round,
        },
        vec![Effect::PresentNotification { round }],
    )
}
