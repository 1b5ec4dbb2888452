//! Periodic tick task
//!
//! A [`Ticker`] owns at most one background task that invokes a callback
//! once per period until the callback breaks or the ticker is cancelled.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Handle to a scheduled periodic callback
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default)]
pub struct Ticker {
    token: Option<CancellationToken>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create an idle ticker
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` every `period`, first firing one period from now
    ///
    /// Cancels the previously scheduled callback, if any.
    pub fn schedule<F>(&mut self, period: Duration, mut callback: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let child = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = child.cancelled() => {
                        trace!("Ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if callback().is_break() {
                            trace!("Ticker finished");
                            break;
                        }
                    }
                }
            }
        });

        self.token = Some(token);
        self.handle = Some(handle);
    }

    /// Stop the running callback, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.handle = None;
    }

    /// Whether a callback is scheduled and has not finished
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
