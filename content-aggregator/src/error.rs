use thiserror::Error;

use crate::source::SourceKind;

/// Errors that can occur during simulation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The simulation world has been dropped and is no longer accessible.
    #[error("Simulation has been shut down")]
    SimulationShutdown,
    /// The driven future is pending but no events remain to advance time.
    #[error("Deadlock: future is pending with no scheduled events")]
    Deadlock,
}

/// A type alias for `Result<T, SimulationError>`.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors produced by the content sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source failed to deliver its payload (simulated transient fault).
    ///
    /// The field is named `kind` rather than `source`: thiserror treats a
    /// field named `source` as the error's cause, which `SourceKind` is not.
    #[error("failed to fetch {kind}")]
    SourceUnavailable {
        /// Which source failed.
        kind: SourceKind,
    },
    /// The underlying simulation stopped while a fetch was in flight.
    #[error("simulation stopped during fetch: {0}")]
    Simulation(#[from] SimulationError),
}
