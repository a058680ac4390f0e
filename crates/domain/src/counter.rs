//! Scroll-triggered counter: counts from 0 up to a target once its region
//! becomes visible.
//!
//! The state machine is one-shot: `Waiting → Running → Finished`. Only the
//! first observation at or above [`VISIBILITY_THRESHOLD`] starts it, and
//! nothing ever moves it backwards. Driving the ticks (timers, teardown) is
//! the caller's job.

use std::ops::ControlFlow;

use serde::Serialize;

/// Fraction of the region that must be visible to start counting.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Interval between two increments, in milliseconds.
pub const TICK_MILLIS: u64 = 20;

/// Lifecycle of a [`Counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterPhase {
    /// Not yet seen; still observing visibility.
    #[default]
    Waiting,
    /// Triggered and incrementing on every tick.
    Running,
    /// Reached its target. Terminal.
    Finished,
}

/// Outcome of feeding a visibility ratio to [`Counter::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// This observation started the count. Observing can stop now.
    Triggered,
    /// Below the threshold, or the counter has already been triggered.
    Ignored,
}

/// Point-in-time view of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterSnapshot {
    pub value: i64,
    pub end: i64,
    pub phase: CounterPhase,
}

/// One-shot count-up from 0 to `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    end: i64,
    value: i64,
    phase: CounterPhase,
}

impl Counter {
    #[must_use]
    pub fn new(end: i64) -> Self {
        Self {
            end,
            value: 0,
            phase: CounterPhase::Waiting,
        }
    }

    /// Feed the current intersection ratio of the counter's region.
    ///
    /// A target of zero or less finishes immediately at 0.
    pub fn observe(&mut self, ratio: f64) -> Observation {
        if self.phase != CounterPhase::Waiting || ratio.is_nan() || ratio < VISIBILITY_THRESHOLD {
            return Observation::Ignored;
        }
        self.phase = if self.end <= 0 {
            CounterPhase::Finished
        } else {
            CounterPhase::Running
        };
        Observation::Triggered
    }

    /// Advance by one step. Returns the new value, or `None` when the counter
    /// is not running.
    pub fn tick(&mut self) -> Option<i64> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        self.value += 1;
        if self.value >= self.end {
            self.value = self.end;
            self.phase = CounterPhase::Finished;
        }
        Some(self.value)
    }

    /// One step of a tick loop: tick, then say whether another tick is due.
    ///
    /// `Continue` carries the new value while the count is still running.
    /// `Break` carries the current value once the counter finished, or when
    /// it was not running in the first place; the loop should stop.
    pub fn advance(&mut self) -> ControlFlow<i64, i64> {
        match self.tick() {
            Some(value) if self.is_running() => ControlFlow::Continue(value),
            _ => ControlFlow::Break(self.value),
        }
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == CounterPhase::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == CounterPhase::Finished
    }

    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            value: self.value,
            end: self.end,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut Counter) -> Vec<i64> {
        std::iter::from_fn(|| counter.tick()).collect()
    }

    #[test]
    fn should_start_at_zero_and_wait() {
        let counter = Counter::new(98);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Waiting);
    }

    #[test]
    fn should_not_tick_before_visibility() {
        let mut counter = Counter::new(98);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn should_ignore_ratios_below_threshold() {
        let mut counter = Counter::new(98);
        assert_eq!(counter.observe(0.0), Observation::Ignored);
        assert_eq!(counter.observe(0.49), Observation::Ignored);
        assert_eq!(counter.phase(), CounterPhase::Waiting);
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn should_trigger_at_exactly_half_visible() {
        let mut counter = Counter::new(98);
        assert_eq!(counter.observe(0.5), Observation::Triggered);
        assert!(counter.is_running());
    }

    #[test]
    fn should_count_to_exactly_end_without_overshooting() {
        let mut counter = Counter::new(98);
        counter.observe(1.0);

        let values = run_to_end(&mut counter);

        assert_eq!(values.len(), 98);
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&98));
        assert!(values.windows(2).all(|w| w[1] == w[0] + 1));
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.value(), 98);
    }

    #[test]
    fn should_not_restart_when_visibility_returns() {
        let mut counter = Counter::new(3);
        counter.observe(1.0);
        run_to_end(&mut counter);

        assert_eq!(counter.observe(0.0), Observation::Ignored);
        assert_eq!(counter.observe(1.0), Observation::Ignored);
        assert_eq!(counter.value(), 3);
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn should_ignore_second_trigger_while_running() {
        let mut counter = Counter::new(10);
        counter.observe(1.0);
        counter.tick();
        counter.tick();

        assert_eq!(counter.observe(1.0), Observation::Ignored);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn should_finish_immediately_when_end_is_zero_or_negative() {
        for end in [0, -5] {
            let mut counter = Counter::new(end);
            assert_eq!(counter.observe(1.0), Observation::Triggered);
            assert!(counter.is_finished());
            assert_eq!(counter.tick(), None);
            assert_eq!(counter.value(), 0);
        }
    }

    #[test]
    fn should_keep_advancing_until_the_target() {
        let mut counter = Counter::new(3);
        counter.observe(1.0);

        assert_eq!(counter.advance(), ControlFlow::Continue(1));
        assert_eq!(counter.advance(), ControlFlow::Continue(2));
        assert_eq!(counter.advance(), ControlFlow::Break(3));
        assert_eq!(counter.advance(), ControlFlow::Break(3));
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn should_stop_advancing_when_not_running() {
        let mut waiting = Counter::new(5);
        assert_eq!(waiting.advance(), ControlFlow::Break(0));
        assert_eq!(waiting.value(), 0);

        let mut empty = Counter::new(0);
        empty.observe(1.0);
        assert_eq!(empty.advance(), ControlFlow::Break(0));
    }
}
