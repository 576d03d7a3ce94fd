//! Timers owned by the session.
//!
//! Each slot holds at most one `gloo_timers` handle.  Dropping a handle
//! cancels the timer, so re-scheduling a slot replaces the pending callback and
//! `cancel_all` leaves nothing behind on teardown.

use gloo_timers::callback::{Interval, Timeout};

#[derive(Default)]
pub struct Scheduler {
    notification: Option<Timeout>,
    status_reset: Option<Timeout>,
    autosave: Option<Interval>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_notification_dismiss<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.notification = Some(Timeout::new(delay_ms, callback));
    }

    pub fn schedule_status_reset<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.status_reset = Some(Timeout::new(delay_ms, callback));
    }

    pub fn start_autosave<F>(&mut self, interval_ms: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.autosave = Some(Interval::new(interval_ms, callback));
    }

    pub fn cancel_all(&mut self) {
        // Dropping the handles clears the underlying JS timers.
        self.notification = None;
        self.status_reset = None;
        self.autosave = None;
    }
}
