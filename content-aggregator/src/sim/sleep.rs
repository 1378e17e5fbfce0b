//! Sleep functionality for simulation time.
//!
//! A [`SleepFuture`] integrates with the event system: creating it schedules
//! a wake event, and the future completes once that event has been processed
//! and logical time has advanced to the wake time.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::SimulationResult;

use super::world::WeakSimWorld;

/// Future that completes after a specified simulation time duration.
///
/// Completes with `Ok(())` once the simulation has processed the wake event
/// scheduled for this task, or with an error if the simulation world was
/// dropped before the wake fired.
pub struct SleepFuture {
    /// Weak reference to the simulation world
    sim: WeakSimWorld,
    /// Unique identifier for this sleep task
    task_id: u64,
    /// Whether this future has already completed
    completed: bool,
}

impl SleepFuture {
    /// Creates a new sleep future.
    ///
    /// This is typically called by `SimWorld::sleep()` and should not be
    /// constructed directly by user code.
    pub(crate) fn new(sim: WeakSimWorld, task_id: u64) -> Self {
        Self {
            sim,
            task_id,
            completed: false,
        }
    }
}

impl Future for SleepFuture {
    type Output = SimulationResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.completed {
            return Poll::Ready(Ok(()));
        }

        let sim = match self.sim.upgrade() {
            Ok(sim) => sim,
            Err(e) => return Poll::Ready(Err(e)),
        };

        if sim.is_task_awake(self.task_id) {
            self.completed = true;
            Poll::Ready(Ok(()))
        } else {
            sim.register_task_waker(self.task_id, cx.waker().clone());
            Poll::Pending
        }
    }
}
