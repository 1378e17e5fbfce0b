//! Core simulation world and coordination logic.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    future::Future,
    pin::pin,
    rc::{Rc, Weak},
    task::{Context, Poll, Waker},
    time::Duration,
};

use crate::{
    error::{SimulationError, SimulationResult},
    events::{Event, EventQueue, ScheduledEvent},
    time::SimTimeProvider,
};

use super::sleep::SleepFuture;

/// Internal simulation state holder.
#[derive(Debug)]
pub(crate) struct SimInner {
    pub(crate) current_time: Duration,
    pub(crate) event_queue: EventQueue,
    pub(crate) next_sequence: u64,

    // Task management for sleep functionality
    pub(crate) next_task_id: u64,
    pub(crate) awakened_tasks: HashSet<u64>,
    pub(crate) task_wakers: HashMap<u64, Waker>,

    // Event processing metrics
    pub(crate) events_processed: u64,
}

impl SimInner {
    fn new() -> Self {
        Self {
            current_time: Duration::ZERO,
            event_queue: EventQueue::new(),
            next_sequence: 0,
            next_task_id: 0,
            awakened_tasks: HashSet::new(),
            task_wakers: HashMap::new(),
            events_processed: 0,
        }
    }
}

/// The central simulation coordinator that manages time and event processing.
///
/// `SimWorld` owns all mutable simulation state and provides the main
/// interface for scheduling events and advancing logical time. It uses a
/// centralized ownership model with handle-based access to avoid borrow
/// checker conflicts between the world and the futures it drives.
#[derive(Debug)]
pub struct SimWorld {
    pub(crate) inner: Rc<RefCell<SimInner>>,
}

impl SimWorld {
    /// Creates a new simulation world at time zero with an empty event queue.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SimInner::new())),
        }
    }

    /// Processes the next scheduled event, advancing logical time to its
    /// timestamp.
    ///
    /// Returns `true` if more events remain after processing.
    pub fn step(&mut self) -> bool {
        let mut inner = self.inner.borrow_mut();

        if let Some(scheduled_event) = inner.event_queue.pop_earliest() {
            // Advance logical time to the event timestamp
            inner.current_time = scheduled_event.time();

            Self::process_event_with_inner(&mut inner, scheduled_event.into_event());

            !inner.event_queue.is_empty()
        } else {
            false
        }
    }

    /// Processes all scheduled events until the queue is empty.
    pub fn run_until_empty(&mut self) {
        while self.step() {}
    }

    /// Drives a future to completion, interleaving polls with event
    /// processing.
    ///
    /// The future is polled once per processed event, so every suspension
    /// point backed by a [`SleepFuture`] resumes exactly when its wake event
    /// fires. Returns [`SimulationError::Deadlock`] if the future is still
    /// pending while no events remain to advance time.
    pub fn run_until_complete<F>(&mut self, future: F) -> SimulationResult<F::Output>
    where
        F: Future,
    {
        let mut future = pin!(future);
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);

        loop {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(output) => return Ok(output),
                Poll::Pending => {
                    if !self.has_pending_events() {
                        tracing::error!(
                            time_ms = self.current_time().as_millis() as u64,
                            "future pending with empty event queue"
                        );
                        return Err(SimulationError::Deadlock);
                    }
                    self.step();
                }
            }
        }
    }

    /// Returns the current simulation time.
    pub fn current_time(&self) -> Duration {
        self.inner.borrow().current_time
    }

    /// Returns the current simulation time.
    ///
    /// Alias of [`current_time`](Self::current_time) matching the
    /// [`TimeProvider`](crate::time::TimeProvider) vocabulary.
    pub fn now(&self) -> Duration {
        self.current_time()
    }

    /// Schedules an event to execute after the specified delay from the
    /// current time.
    pub fn schedule_event(&self, event: Event, delay: Duration) {
        let mut inner = self.inner.borrow_mut();
        let scheduled_time = inner.current_time + delay;
        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        inner
            .event_queue
            .schedule(ScheduledEvent::new(scheduled_time, event, sequence));
    }

    /// Creates a weak reference to this simulation world.
    ///
    /// Weak references provide handle-based access from futures without
    /// preventing the world from being dropped.
    pub fn downgrade(&self) -> WeakSimWorld {
        WeakSimWorld {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Returns `true` if any events are scheduled.
    pub fn has_pending_events(&self) -> bool {
        !self.inner.borrow().event_queue.is_empty()
    }

    /// Returns the number of scheduled events.
    pub fn pending_event_count(&self) -> usize {
        self.inner.borrow().event_queue.len()
    }

    /// Returns the number of events processed so far.
    pub fn events_processed(&self) -> u64 {
        self.inner.borrow().events_processed
    }

    /// Get a time provider backed by this simulation.
    pub fn time_provider(&self) -> SimTimeProvider {
        SimTimeProvider::new(self.downgrade())
    }

    /// Sleep for the specified duration in simulation time.
    ///
    /// Returns a future that completes once logical time has advanced past
    /// the scheduled wake event.
    pub fn sleep(&self, duration: Duration) -> SleepFuture {
        let task_id = self.generate_task_id();

        self.schedule_event(Event::Timer { task_id }, duration);

        SleepFuture::new(self.downgrade(), task_id)
    }

    /// Generate a unique task ID for sleep operations.
    fn generate_task_id(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let task_id = inner.next_task_id;
        inner.next_task_id += 1;
        task_id
    }

    /// Check if a task has been awakened.
    pub(crate) fn is_task_awake(&self, task_id: u64) -> bool {
        self.inner.borrow().awakened_tasks.contains(&task_id)
    }

    /// Register a waker for a task.
    pub(crate) fn register_task_waker(&self, task_id: u64, waker: Waker) {
        self.inner.borrow_mut().task_wakers.insert(task_id, waker);
    }

    /// Static event processor for simulation events.
    fn process_event_with_inner(inner: &mut SimInner, event: Event) {
        inner.events_processed += 1;

        match event {
            Event::Timer { task_id } => {
                tracing::trace!(
                    task_id,
                    time_ms = inner.current_time.as_millis() as u64,
                    "timer fired"
                );
                inner.awakened_tasks.insert(task_id);

                if let Some(waker) = inner.task_wakers.remove(&task_id) {
                    waker.wake();
                }
            }
        }
    }
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak reference to a [`SimWorld`].
///
/// This provides handle-based access to the simulation without holding a
/// strong reference that would prevent cleanup.
#[derive(Debug)]
pub struct WeakSimWorld {
    pub(crate) inner: Weak<RefCell<SimInner>>,
}

impl WeakSimWorld {
    /// Attempts to upgrade this weak reference to a strong reference.
    pub fn upgrade(&self) -> SimulationResult<SimWorld> {
        self.inner
            .upgrade()
            .map(|inner| SimWorld { inner })
            .ok_or(SimulationError::SimulationShutdown)
    }

    /// Returns the current simulation time.
    pub fn now(&self) -> SimulationResult<Duration> {
        let sim = self.upgrade()?;
        Ok(sim.now())
    }

    /// Sleep for the specified duration in simulation time.
    pub fn sleep(&self, duration: Duration) -> SimulationResult<SleepFuture> {
        let sim = self.upgrade()?;
        Ok(sim.sleep(duration))
    }
}

impl Clone for WeakSimWorld {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
