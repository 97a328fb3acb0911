//! Round timer engine: owns the timer state and drives it tick by tick

use tracing::{debug, info, warn};

use crate::{
    error::TimerError,
    state::TimerState,
    utils::Locale,
};

use super::{transition, Effect, Notifier, Scheduler, SoundPlayer, TimerConfig};

/// Finite state machine counting down through rounds and rests.
///
/// Only `on_tick` mutates the state. Exactly one tick is outstanding while
/// the timer runs; none once it has finished or been stopped.
pub struct RoundTimer<P: SoundPlayer, N: Notifier, S: Scheduler> {
    config: TimerConfig,
    state: TimerState,
    tick: Option<S::Handle>,
    stopped: bool,
    notification_shown: bool,
    locale: Locale,
    sound: P,
    notifier: N,
    scheduler: S,
}

impl<P: SoundPlayer, N: Notifier, S: Scheduler> RoundTimer<P, N, S> {
    /// Validate `config`, enter the initial countdown and schedule the first tick
    pub fn start(
        config: TimerConfig,
        sound: P,
        notifier: N,
        scheduler: S,
    ) -> Result<Self, TimerError> {
        config.validate()?;

        let mut timer = Self {
            config,
            state: TimerState::initial(),
            tick: None,
            stopped: false,
            notification_shown: false,
            locale: Locale::default(),
            sound,
            notifier,
            scheduler,
        };
        timer.schedule_next();

        info!(
            "Round timer started: {} rounds of {}s, {}s rest",
            config.round_count, config.round_duration_seconds, config.rest_duration_seconds
        );
        Ok(timer)
    }

    /// Use `locale` for notification text
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Handle one elapsed second and return the new snapshot
    pub fn on_tick(&mut self) -> TimerState {
        if self.stopped || self.state.is_finished() {
            debug!("Ignoring tick for a timer that is no longer running");
            return self.state;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        debug!("Tick: {} {}s left", self.state.phase, self.state.remaining_seconds);

        if self.state.remaining_seconds == 0 {
            let (next, effects) = transition(&self.state, &self.config);
            info!(
                "Phase {} -> {} (round {}/{})",
                self.state.phase, next.phase, next.completed_rounds, self.config.round_count
            );
            self.state = next;
            for effect in effects {
                self.apply(effect);
            }
        }

        if !self.state.is_finished() {
            self.schedule_next();
        }
        self.state
    }

    /// Cancel any pending tick and release the timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.cancel_pending();
        if self.notification_shown {
            self.apply(Effect::DismissNotification);
        }
        info!("Round timer stopped in {} phase", self.state.phase);
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Termination signal for the presentation layer
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_running(&self) -> bool {
        !self.stopped && !self.state.is_finished()
    }

    fn schedule_next(&mut self) {
        self.cancel_pending();
        self.tick = Some(self.scheduler.schedule_tick());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.scheduler.cancel_tick(handle);
        }
    }

    fn apply(&mut self, effect: Effect) {
        let result = match effect {
            Effect::PlaySound(kind) => self.sound.play(kind),
            Effect::PresentNotification { round } => {
                self.notification_shown = true;
                self.notifier.present(&self.locale.round_title(round))
            }
            Effect::DismissNotification => {
                self.notification_shown = false;
                self.notifier.dismiss()
            }
            Effect::CancelTick => {
                self.cancel_pending();
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!("Ignoring failed timer effect {:?}: {}", effect, e);
        }
    }
}

impl<P: SoundPlayer, N: Notifier, S: Scheduler> Drop for RoundTimer<P, N, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{
            testing::{Event, Recorder},
            SoundKind,
        },
        error::EffectError,
        state::Phase,
    };

    fn start(config: TimerConfig, recorder: &Recorder) -> RoundTimer<Recorder, Recorder, Recorder> {
        RoundTimer::start(config, recorder.clone(), recorder.clone(), recorder.clone())
            .expect("valid config")
    }

    /// Tick until finished, collecting every snapshot
    fn run_to_end(timer: &mut RoundTimer<Recorder, Recorder, Recorder>) -> Vec<TimerState> {
        let mut states = vec![timer.state()];
        while !timer.is_finished() {
            states.push(timer.on_tick());
            assert!(states.len() < 10_000, "timer never finished");
        }
        states
    }

    #[test]
    fn start_enters_initial_countdown() {
        let recorder = Recorder::default();
        let timer = start(TimerConfig::new(5, 180, 60), &recorder);

        assert_eq!(timer.state(), TimerState::initial());
        assert_eq!(recorder.live_ticks(), 1);
    }

    #[test]
    fn invalid_config_schedules_nothing() {
        let recorder = Recorder::default();
        let result = RoundTimer::start(
            TimerConfig::new(0, 180, 60),
            recorder.clone(),
            recorder.clone(),
            recorder.clone(),
        );

        assert!(matches!(result, Err(TimerError::InvalidConfig(_))));
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn two_round_session_follows_expected_sequence() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(2, 5, 3), &recorder);

        let states = run_to_end(&mut timer);
        let seen: Vec<(Phase, u32, u32)> = states
            .iter()
            .map(|s| (s.phase, s.remaining_seconds, s.completed_rounds))
            .collect();

        let mut expected = vec![];
        expected.extend((1..=3).rev().map(|s| (Phase::Initial, s, 0)));
        expected.extend((1..=5).rev().map(|s| (Phase::Round, s, 1)));
        expected.extend((1..=3).rev().map(|s| (Phase::Rest, s, 1)));
        expected.extend((1..=5).rev().map(|s| (Phase::Round, s, 2)));
        expected.extend((1..=3).rev().map(|s| (Phase::Rest, s, 2)));
        expected.push((Phase::Finished, 0, 2));

        assert_eq!(seen, expected);
        // 19 ticks, plus the initial snapshot
        assert_eq!(states.len(), 20);
    }

    #[test]
    fn single_round_emits_one_of_each_cue() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(1, 4, 2), &recorder);
        let phases: Vec<Phase> = run_to_end(&mut timer).iter().map(|s| s.phase).collect();

        let mut distinct = phases.clone();
        distinct.dedup();
        assert_eq!(distinct, vec![Phase::Initial, Phase::Round, Phase::Rest, Phase::Finished]);

        let effects: Vec<Event> = recorder
            .events()
            .into_iter()
            .filter(|e| !matches!(e, Event::Scheduled(_) | Event::Cancelled(_)))
            .collect();
        assert_eq!(
            effects,
            vec![
                Event::Presented("Round 1".to_string()),
                Event::Played(SoundKind::RestStart),
                Event::Played(SoundKind::RoundEnd),
                Event::Dismissed,
            ]
        );
    }

    #[test]
    fn remaining_seconds_strictly_decrease_within_a_phase() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(3, 7, 4), &recorder);
        let states = run_to_end(&mut timer);

        for pair in states.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            if before.phase == after.phase {
                assert_eq!(after.remaining_seconds + 1, before.remaining_seconds);
            } else {
                assert_eq!(before.remaining_seconds, 1);
            }
        }
    }

    #[test]
    fn finishes_after_round_count_cycles() {
        let recorder = Recorder::default();
        let config = TimerConfig::new(4, 2, 1);
        let mut timer = start(config, &recorder);
        let states = run_to_end(&mut timer);

        let rounds_started = states
            .windows(2)
            .filter(|p| p[0].phase != Phase::Round && p[1].phase == Phase::Round)
            .count();
        assert_eq!(rounds_started, 4);
        assert_eq!(timer.state(), TimerState::finished(4));
        assert_eq!(states.len() as u64 - 1, config.total_seconds());
    }

    #[test]
    fn at_most_one_tick_is_ever_live() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(2, 3, 2), &recorder);

        while !timer.is_finished() {
            assert_eq!(recorder.live_ticks(), 1);
            timer.on_tick();
        }
        assert_eq!(recorder.live_ticks(), 0);
    }

    #[test]
    fn finished_timer_ignores_stray_ticks() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(1, 1, 1), &recorder);
        run_to_end(&mut timer);
        let scheduled = recorder.scheduled_count();

        assert_eq!(timer.on_tick(), TimerState::finished(1));
        assert_eq!(recorder.scheduled_count(), scheduled);
    }

    #[test]
    fn stop_is_idempotent_and_cancels_the_tick() {
        let recorder = Recorder::default();
        let mut timer = start(TimerConfig::new(3, 5, 5), &recorder);
        for _ in 0..4 {
            timer.on_tick();
        }
        assert_eq!(timer.state().phase, Phase::Round);

        timer.stop();
        let after_first_stop = recorder.events();
        timer.stop();
        let before = timer.state();
        timer.on_tick();

        assert_eq!(recorder.events(), after_first_stop);
        assert_eq!(recorder.live_ticks(), 0);
        assert_eq!(timer.state(), before);
        assert!(after_first_stop.contains(&Event::Dismissed));
        assert!(!timer.is_running());
    }

    #[test]
    fn dropping_the_timer_cancels_its_tick() {
        let recorder = Recorder::default();
        let timer = start(TimerConfig::new(3, 5, 5), &recorder);
        assert_eq!(recorder.live_ticks(), 1);

        drop(timer);
        assert_eq!(recorder.live_ticks(), 0);
    }

    #[test]
    fn effect_failures_do_not_change_progression() {
        let recorder = Recorder::failing(EffectError::Sound("device busy".to_string()));
        let mut timer = start(TimerConfig::new(2, 5, 3), &recorder);
        let ticks = run_to_end(&mut timer).len() - 1;

        assert_eq!(ticks, 19);
        assert_eq!(timer.state(), TimerState::finished(2));
    }
}
