//! Logical-time simulation engine.
//!
//! [`SimWorld`] owns all mutable simulation state (current time, event queue,
//! task wakers) behind a centralized ownership model with weak handles for
//! access from futures. Time only advances when scheduled events are
//! processed, so any code driven by [`SimWorld::run_until_complete`] runs
//! deterministically and without real wall-clock waits.

/// Sleep futures backed by simulation time.
pub mod sleep;
/// Core simulation world and event processing.
pub mod world;

pub use sleep::SleepFuture;
pub use world::{SimWorld, WeakSimWorld};
