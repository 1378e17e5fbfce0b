//! Time provider implementations for simulation and real time.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::SimulationResult;
use crate::sim::WeakSimWorld;

/// Provider trait for time operations.
///
/// This trait allows code to work with both simulation time and real
/// wall-clock time in a unified way. Implementations handle sleeping and
/// getting current time appropriate for their environment.
#[async_trait(?Send)]
pub trait TimeProvider: Clone {
    /// Sleep for the specified duration.
    ///
    /// In simulation, this advances logical time. In real time, this uses
    /// actual wall-clock delays.
    async fn sleep(&self, duration: Duration) -> SimulationResult<()>;

    /// Get the current time.
    ///
    /// In simulation, this returns the canonical simulation time. In real
    /// time, this returns wall-clock elapsed time since provider creation.
    fn now(&self) -> Duration;
}

/// Simulation time provider that integrates with [`SimWorld`](crate::sim::SimWorld).
#[derive(Debug, Clone)]
pub struct SimTimeProvider {
    sim: WeakSimWorld,
}

impl SimTimeProvider {
    /// Create a new simulation time provider.
    pub fn new(sim: WeakSimWorld) -> Self {
        Self { sim }
    }
}

#[async_trait(?Send)]
impl TimeProvider for SimTimeProvider {
    async fn sleep(&self, duration: Duration) -> SimulationResult<()> {
        self.sim.sleep(duration)?.await
    }

    fn now(&self) -> Duration {
        self.sim.now().unwrap_or(Duration::ZERO)
    }
}

/// Real time provider using Tokio's time facilities.
#[derive(Debug, Clone)]
pub struct TokioTimeProvider {
    /// Start time for calculating elapsed duration
    start_time: std::time::Instant,
}

impl TokioTimeProvider {
    /// Create a new Tokio time provider.
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for TokioTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TimeProvider for TokioTimeProvider {
    async fn sleep(&self, duration: Duration) -> SimulationResult<()> {
        tokio::time::sleep(duration).await;
        Ok(())
    }

    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}
