//! Cancellable single-shot timers.
//!
//! A [`SingleShot`] holds at most one pending deadline plus a payload. Scheduling
//! always replaces (cancels) whatever was pending, so a timer can never fire on
//! behalf of a request that has since been superseded.
//!
//! Timers do not run by themselves: the owning event loop asks for the next
//! [`SingleShot::deadline`], sleeps until then, and calls
//! [`SingleShot::take_due`]. Deadlines use [`tokio::time::Instant`] so tests can
//! drive them with `tokio::time::pause()` / `advance()`.

use tokio::time::{Duration, Instant};

#[derive(Debug)]
pub struct SingleShot<T> {
    name: &'static str,
    pending: Option<(Instant, T)>,
}

impl<T> SingleShot<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, pending: None }
    }

    /// Schedule `payload` to become due after `delay`, cancelling any pending
    /// task. Returns the payload of the cancelled task, if there was one.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> Option<T> {
        let deadline = Instant::now() + delay;
        let cancelled = self.pending.replace((deadline, payload)).map(|(_, p)| p);
        tracing::debug!(
            timer = self.name,
            delay_ms = delay.as_millis() as u64,
            replaced = cancelled.is_some(),
            "timer scheduled"
        );
        cancelled
    }

    /// Cancel the pending task, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        let cancelled = self.pending.take().map(|(_, p)| p);
        if cancelled.is_some() {
            tracing::debug!(timer = self.name, "timer cancelled");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, payload)| payload)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the payload if its deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if deadline <= now => {
                tracing::debug!(timer = self.name, "timer fired");
                self.pending.take().map(|(_, p)| p)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
