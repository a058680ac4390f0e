//! Counter driver: runs a [`Counter`] on the tokio runtime.
//!
//! The spawned task reads visibility ratios until the counter triggers,
//! releases the [`VisibilitySource`], then ticks at a fixed interval until the
//! target is reached. Every change is published on a [`watch`] channel.
//! Dropping the [`CounterHandle`] is the unmount: the task is aborted and no
//! further tick fires.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use clinic_domain::counter::{Counter, CounterPhase, CounterSnapshot, Observation, TICK_MILLIS};

use crate::ports::VisibilitySource;

/// Interval between two increments.
pub const DEFAULT_TICK: Duration = Duration::from_millis(TICK_MILLIS);

/// Owner of a running counter task.
pub struct CounterHandle {
    snapshots: watch::Receiver<CounterSnapshot>,
    task: JoinHandle<()>,
}

impl CounterHandle {
    /// Spawn the counter task. Must be called from within a tokio runtime.
    pub fn spawn<V>(counter: Counter, source: V, tick: Duration) -> Self
    where
        V: VisibilitySource + Send + 'static,
    {
        let (sender, snapshots) = watch::channel(counter.snapshot());
        let task = tokio::spawn(run(counter, source, tick, sender));
        Self { snapshots, task }
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        *self.snapshots.borrow()
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.snapshots.borrow().value
    }

    /// Receiver following every published state. It stops changing once the
    /// handle is dropped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until the counter reaches its target.
    ///
    /// Returns the last published state early if the task ends without
    /// finishing, e.g. because its region disappeared before being seen.
    pub async fn finished(&mut self) -> CounterSnapshot {
        let done = self
            .snapshots
            .wait_for(|snapshot| snapshot.phase == CounterPhase::Finished)
            .await
            .map(|snapshot| *snapshot);
        done.unwrap_or_else(|_| *self.snapshots.borrow())
    }
}

impl Drop for CounterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<V>(
    mut counter: Counter,
    mut source: V,
    tick: Duration,
    snapshots: watch::Sender<CounterSnapshot>,
) where
    V: VisibilitySource,
{
    loop {
        let Some(ratio) = source.next_ratio().await else {
            tracing::debug!(end = counter.end(), "region gone before the counter was seen");
            return;
        };
        if counter.observe(ratio) == Observation::Triggered {
            break;
        }
    }
    // Triggered once; stop observing.
    drop(source);
    tracing::debug!(end = counter.end(), "counter triggered");
    snapshots.send_replace(counter.snapshot());

    let tick = tick.max(Duration::from_millis(1));
    let mut interval = tokio::time::interval_at(Instant::now() + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    while counter.is_running() {
        interval.tick().await;
        let step = counter.advance();
        snapshots.send_replace(counter.snapshot());
        if step.is_break() {
            break;
        }
    }
    tracing::debug!(value = counter.value(), "counter finished");
}
