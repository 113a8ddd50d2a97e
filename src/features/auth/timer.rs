//! Single-slot delayed callback used to clear a form's transient error.
//!
//! A `ResetTimer` holds at most one pending callback. Arming it again cancels
//! the previous callback first, and dropping the timer (component teardown)
//! cancels whatever is still pending, so a callback never fires into a form
//! that is gone.

use std::time::Duration;
use tracing::trace;

/// How long a failure stays on screen before the form resets.
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(3);

/// Schedules callbacks on the host event loop.
pub trait Scheduler {
    /// Pending callback. Dropping the handle must cancel the callback if it
    /// has not fired yet.
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

pub struct ResetTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ResetTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Replaces any pending callback with `callback`, due after `delay`.
    pub fn arm(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        trace!(delay_ms = delay.as_millis() as u64, "arming reset timer");
        self.pending = Some(self.scheduler.schedule(delay, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!("reset timer cancelled");
        }
    }

    /// True while a handle is held, whether or not its callback already ran.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Scheduler;
    use gloo_timers::callback::Timeout;
    use std::time::Duration;

    /// `setTimeout`-backed scheduler; a dropped `Timeout` calls `clearTimeout`.
    #[derive(Clone, Copy, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Handle = Timeout;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Timeout {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, callback)
        }
    }
}
