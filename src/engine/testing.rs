//! Recording collaborators for engine tests

use std::sync::{Arc, Mutex};

use crate::error::EffectError;

use super::{Notifier, Scheduler, SoundKind, SoundPlayer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Played(SoundKind),
    Presented(String),
    Dismissed,
    Scheduled(u64),
    Cancelled(u64),
}

#[derive(Debug, Default)]
struct Inner {
    events: Vec<Event>,
    next_tick: u64,
    failure: Option<EffectError>,
}

/// Sound player, notifier and manual scheduler sharing one event log
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Inner>>,
}

impl Recorder {
    /// Every sound and notification call records its event, then fails
    pub fn failing(error: EffectError) -> Self {
        let recorder = Self::default();
        recorder.inner.lock().unwrap().failure = Some(error);
        recorder
    }

    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().unwrap().events.clone()
    }

    pub fn scheduled_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Scheduled(_)))
            .count()
    }

    /// Ticks scheduled and not yet cancelled
    pub fn live_ticks(&self) -> usize {
        let events = self.events();
        events
            .iter()
            .filter_map(|e| match e {
                Event::Scheduled(id) => Some(*id),
                _ => None,
            })
            .filter(|id| !events.contains(&Event::Cancelled(*id)))
            .count()
    }

    fn record(&self, event: Event) -> Result<(), EffectError> {
        let mut inner = self.inner.lock().unwrap();
        inner.events.push(event);
        match &inner.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl SoundPlayer for Recorder {
    fn play(&self, kind: SoundKind) -> Result<(), EffectError> {
        self.record(Event::Played(kind))
    }
}

impl Notifier for Recorder {
    fn present(&self, text: &str) -> Result<(), EffectError> {
        self.record(Event::Presented(text.to_string()))
    }

    fn dismiss(&self) -> Result<(), EffectError> {
        self.record(Event::Dismissed)
    }
}

impl Scheduler for Recorder {
    type Handle = u64;

    fn schedule_tick(&mut self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_tick += 1;
        let id = inner.next_tick;
        inner.events.push(Event::Scheduled(id));
        id
    }

    fn cancel_tick(&mut self, handle: u64) {
        self.inner.lock().unwrap().events.push(Event::Cancelled(handle));
    }
}
