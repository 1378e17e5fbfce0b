//! # Content Aggregator
//!
//! A small crate demonstrating asynchronous data-fetching patterns over three
//! mock content sources (user profiles, posts, comments):
//!
//! - Sequential orchestration: steps run in program order, each failure is
//!   caught locally and degraded to a "not found" sentinel (fail-soft).
//! - Parallel orchestration, fail-fast: all fetches run concurrently and the
//!   first failure aborts the whole aggregation (all-or-nothing).
//! - Parallel orchestration, best-effort: all fetches run concurrently, every
//!   outcome is awaited, failures become sentinels.
//!
//! There is no real network I/O. Latency and transient faults are simulated
//! behind two injectable seams:
//!
//! - [`TimeProvider`]: [`SimTimeProvider`] advances logical time through an
//!   event-driven [`SimWorld`], [`TokioTimeProvider`] uses real Tokio timers.
//! - [`RandomProvider`]: [`SimRandomProvider`] is a seeded deterministic RNG,
//!   [`ThreadRngProvider`] draws from the thread-local OS-backed RNG.
//!
//! With the simulation providers, tests assert latency properties as exact
//! equalities on logical time (sequential time is the sum of the delays,
//! parallel time is the max) without real wall-clock waits.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Aggregate result types combining the three source outcomes.
pub mod aggregate;
/// Error types for fetch operations and simulation.
pub mod error;
/// Event scheduling for the simulation engine.
pub mod events;
/// Sequential and parallel orchestration over the content sources.
pub mod orchestrator;
/// Random number generation provider abstraction.
pub mod random;
/// Logical-time simulation world and sleep futures.
pub mod sim;
/// Mock content sources with configurable latency and failure injection.
pub mod source;
/// Time provider abstraction for simulation and real time.
pub mod time;

pub use aggregate::{AggregateContent, SourceOutcome};
pub use error::{FetchError, SimulationError, SimulationResult};
pub use events::{Event, EventQueue, ScheduledEvent};
pub use orchestrator::Aggregator;
pub use random::{RandomProvider, SimRandomProvider, ThreadRngProvider};
pub use sim::{SimWorld, SleepFuture, WeakSimWorld};
pub use source::{
    ClientConfig, Comment, ContentClient, Post, SourceKind, SourceProfile, UserProfile,
};
pub use time::{SimTimeProvider, TimeProvider, TokioTimeProvider};
