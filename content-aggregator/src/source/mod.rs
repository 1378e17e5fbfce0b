//! Mock content sources with simulated latency and failure injection.
//!
//! [`ContentClient`] exposes one fetch operation per source. Each fetch
//! sleeps through the injected [`TimeProvider`] for its configured latency,
//! then either returns its fixed 3-record payload or fails with a typed
//! error, decided by the injected [`RandomProvider`] against the configured
//! failure probability. The three sources are fully independent: no state is
//! shared between them.

use std::fmt;
use std::time::Duration;

use crate::error::FetchError;
use crate::random::RandomProvider;
use crate::time::TimeProvider;

/// Record types served by the sources.
pub mod records;

pub use records::{Comment, Post, UserProfile};

/// Identifies one of the three content sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The user profile source.
    Users,
    /// The post source.
    Posts,
    /// The comment source.
    Comments,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Users => write!(f, "user profiles"),
            SourceKind::Posts => write!(f, "posts"),
            SourceKind::Comments => write!(f, "comments"),
        }
    }
}

/// Latency and fault configuration for a single source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceProfile {
    /// Simulated fetch latency.
    pub latency: Duration,
    /// Probability in `[0.0, 1.0]` that a fetch fails.
    pub failure_probability: f64,
}

impl SourceProfile {
    /// A profile with the given latency that never fails.
    pub fn reliable(latency: Duration) -> Self {
        Self {
            latency,
            failure_probability: 0.0,
        }
    }
}

/// Per-source configuration for a [`ContentClient`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientConfig {
    /// Profile for the user source.
    pub users: SourceProfile,
    /// Profile for the post source.
    pub posts: SourceProfile,
    /// Profile for the comment source.
    pub comments: SourceProfile,
}

impl ClientConfig {
    /// Default latencies with transient faults enabled
    /// (40% / 30% / 30% failure rates for users / posts / comments).
    pub fn flaky() -> Self {
        Self {
            users: SourceProfile {
                latency: Duration::from_millis(1000),
                failure_probability: 0.4,
            },
            posts: SourceProfile {
                latency: Duration::from_millis(1500),
                failure_probability: 0.3,
            },
            comments: SourceProfile {
                latency: Duration::from_millis(2000),
                failure_probability: 0.3,
            },
        }
    }

    /// Default latencies with faults disabled: every fetch succeeds.
    pub fn reliable() -> Self {
        Self {
            users: SourceProfile::reliable(Duration::from_millis(1000)),
            posts: SourceProfile::reliable(Duration::from_millis(1500)),
            comments: SourceProfile::reliable(Duration::from_millis(2000)),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::reliable()
    }
}

/// Client over the three mock content sources.
///
/// Generic over the time and randomness seams so the same fetch logic runs
/// against simulated logical time in tests and real Tokio timers in the demo
/// binary.
#[derive(Debug, Clone)]
pub struct ContentClient<T: TimeProvider, R: RandomProvider> {
    time: T,
    random: R,
    config: ClientConfig,
}

impl<T: TimeProvider, R: RandomProvider> ContentClient<T, R> {
    /// Create a client with an explicit configuration.
    pub fn new(time: T, random: R, config: ClientConfig) -> Self {
        Self {
            time,
            random,
            config,
        }
    }

    /// Create a client whose sources never fail.
    pub fn reliable(time: T, random: R) -> Self {
        Self::new(time, random, ClientConfig::reliable())
    }

    /// Create a client whose sources fail with the default probabilities.
    pub fn flaky(time: T, random: R) -> Self {
        Self::new(time, random, ClientConfig::flaky())
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the user profiles.
    pub async fn fetch_users(&self) -> Result<Vec<UserProfile>, FetchError> {
        let profile = self.config.users;
        self.fetch(SourceKind::Users, profile, records::sample_users)
            .await
    }

    /// Fetch the posts.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let profile = self.config.posts;
        self.fetch(SourceKind::Posts, profile, records::sample_posts)
            .await
    }

    /// Fetch the comments.
    pub async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchError> {
        let profile = self.config.comments;
        self.fetch(SourceKind::Comments, profile, records::sample_comments)
            .await
    }

    /// Shared fetch path: sleep for the configured latency, then either fail
    /// with the configured probability or produce the fixed payload.
    async fn fetch<P>(
        &self,
        kind: SourceKind,
        profile: SourceProfile,
        payload: fn() -> Vec<P>,
    ) -> Result<Vec<P>, FetchError> {
        tracing::debug!(
            source = %kind,
            latency_ms = profile.latency.as_millis() as u64,
            "fetch started"
        );

        self.time.sleep(profile.latency).await?;

        if self.random.random_bool(profile.failure_probability) {
            tracing::debug!(source = %kind, "fetch failed");
            return Err(FetchError::SourceUnavailable { kind });
        }

        let records = payload();
        tracing::debug!(source = %kind, records = records.len(), "fetch complete");
        Ok(records)
    }
}
