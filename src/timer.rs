use std::time::{Duration, Instant};

use log::debug;

use crate::game::tick_interval;

/// The shell's single repeating tick schedule.
///
/// Starting or rescheduling replaces the previous deadline, so at most one
/// schedule is ever armed.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    schedule: Option<Schedule>,
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    next_due: Instant,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer at `tick_rate` ticks per second, first firing one
    /// interval after `now`.
    pub fn start(&mut self, tick_rate: u32, now: Instant) {
        self.arm(tick_rate, now);
    }

    /// Replaces the current schedule with one at `tick_rate`.
    pub fn reschedule(&mut self, tick_rate: u32, now: Instant) {
        if self.schedule.is_some() {
            debug!("rescheduling tick timer at {tick_rate}/s");
        }
        self.arm(tick_rate, now);
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        if self.schedule.take().is_some() {
            debug!("tick timer cancelled");
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    /// Interval of the armed schedule.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.schedule.map(|schedule| schedule.interval)
    }

    /// Returns true when a tick is due at `now` and moves the deadline forward.
    ///
    /// A late poll fires once; missed ticks are dropped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };

        if now < schedule.next_due {
            return false;
        }

        schedule.next_due += schedule.interval;
        if schedule.next_due <= now {
            schedule.next_due = now + schedule.interval;
        }
        true
    }

    fn arm(&mut self, tick_rate: u32, now: Instant) {
        let interval = tick_interval(tick_rate);
        self.schedule = Some(Schedule {
            interval,
            next_due: now + interval,
        });
    }
}
