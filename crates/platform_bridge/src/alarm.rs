//! Alarm-audio service contracts and baseline adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AlarmAudioService`].
pub type AlarmFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that starts playback of the page's alarm audio resource.
pub trait AlarmAudioService {
    /// Begins alarm playback; resolves once playback has started.
    fn play<'a>(&'a self) -> AlarmFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op alarm service for hosts without audio playback.
pub struct NoopAlarmAudioService;

impl AlarmAudioService for NoopAlarmAudioService {
    fn play<'a>(&'a self) -> AlarmFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory alarm service counting playbacks, optionally scripted to fail.
pub struct MemoryAlarmAudioService {
    plays: Rc<Cell<u32>>,
    failure: Option<String>,
}

impl MemoryAlarmAudioService {
    /// Creates a service whose every playback fails with `error`.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            plays: Rc::default(),
            failure: Some(error.into()),
        }
    }

    /// Returns how many playbacks were requested so far.
    pub fn play_count(&self) -> u32 {
        self.plays.get()
    }
}

impl AlarmAudioService for MemoryAlarmAudioService {
    fn play<'a>(&'a self) -> AlarmFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.plays.set(self.plays.get() + 1);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        })
    }
}
