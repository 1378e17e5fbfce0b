//! Orchestration strategies over the content sources.
//!
//! Four modes with deliberately different fault policies:
//!
//! - [`sequential`](Aggregator::sequential): steps in program order, each
//!   failure degraded to a sentinel (fail-soft). Total latency is the sum of
//!   the three delays.
//! - [`sequential_with_progress`](Aggregator::sequential_with_progress): the
//!   same contract, with a human-readable progress line before and after each
//!   step.
//! - [`parallel_fail_fast`](Aggregator::parallel_fail_fast): all sources
//!   concurrently, first failure aborts the whole aggregation
//!   (all-or-nothing). Total latency is the max of the three delays.
//! - [`parallel_best_effort`](Aggregator::parallel_best_effort): all sources
//!   concurrently, every outcome awaited, failures become sentinels.
//!
//! The fail-soft/fail-fast asymmetry between the sequential and fail-fast
//! parallel modes is the behavioral contract of this crate, not an accident.

use crate::aggregate::{AggregateContent, SourceOutcome};
use crate::error::FetchError;
use crate::random::RandomProvider;
use crate::source::ContentClient;
use crate::time::TimeProvider;

/// Runs orchestration strategies over a [`ContentClient`].
#[derive(Debug, Clone)]
pub struct Aggregator<T: TimeProvider, R: RandomProvider> {
    client: ContentClient<T, R>,
}

impl<T: TimeProvider, R: RandomProvider> Aggregator<T, R> {
    /// Create an aggregator over the given client.
    pub fn new(client: ContentClient<T, R>) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &ContentClient<T, R> {
        &self.client
    }

    /// Fetch users, then posts, then comments, awaiting each in turn.
    ///
    /// Each step's failure is caught locally and replaced with the sentinel;
    /// the remaining steps are always attempted. The returned aggregate has
    /// all three fields populated.
    pub async fn sequential(&self) -> AggregateContent {
        tracing::debug!("sequential aggregation started");

        let users = self.client.fetch_users().await.into();
        let posts = self.client.fetch_posts().await.into();
        let comments = self.client.fetch_comments().await.into();

        let aggregate = AggregateContent {
            users,
            posts,
            comments,
        };
        tracing::debug!(complete = aggregate.is_complete(), "sequential aggregation finished");
        aggregate
    }

    /// Sequential fail-soft aggregation with step-by-step progress lines.
    ///
    /// Emits an info-level message before and after each step, then combines
    /// the three outcomes into the final aggregate.
    pub async fn sequential_with_progress(&self) -> AggregateContent {
        tracing::info!("fetching user profiles...");
        let users: SourceOutcome<_> = self.client.fetch_users().await.into();
        match users.as_fetched() {
            Some(records) => tracing::info!(records = records.len(), "user profiles fetched"),
            None => tracing::info!("user profiles data not found"),
        }

        tracing::info!("fetching posts...");
        let posts: SourceOutcome<_> = self.client.fetch_posts().await.into();
        match posts.as_fetched() {
            Some(records) => tracing::info!(records = records.len(), "posts fetched"),
            None => tracing::info!("posts data not found"),
        }

        tracing::info!("fetching comments...");
        let comments: SourceOutcome<_> = self.client.fetch_comments().await.into();
        match comments.as_fetched() {
            Some(records) => tracing::info!(records = records.len(), "comments fetched"),
            None => tracing::info!("comments data not found"),
        }

        AggregateContent {
            users,
            posts,
            comments,
        }
    }

    /// Fetch all three sources concurrently; the first failure aborts the
    /// whole aggregation.
    ///
    /// On success the aggregate is complete by construction. On failure a
    /// single [`FetchError`] surfaces and no aggregate is produced.
    pub async fn parallel_fail_fast(&self) -> Result<AggregateContent, FetchError> {
        tracing::debug!("parallel fail-fast aggregation started");

        let (users, posts, comments) = tokio::try_join!(
            self.client.fetch_users(),
            self.client.fetch_posts(),
            self.client.fetch_comments(),
        )?;

        Ok(AggregateContent {
            users: SourceOutcome::Fetched(users),
            posts: SourceOutcome::Fetched(posts),
            comments: SourceOutcome::Fetched(comments),
        })
    }

    /// Fetch all three sources concurrently and await every settlement.
    ///
    /// Failures are degraded to sentinels per source, so a complete aggregate
    /// is always returned.
    pub async fn parallel_best_effort(&self) -> AggregateContent {
        tracing::debug!("parallel best-effort aggregation started");

        let (users, posts, comments) = tokio::join!(
            self.client.fetch_users(),
            self.client.fetch_posts(),
            self.client.fetch_comments(),
        );

        AggregateContent {
            users: users.into(),
            posts: posts.into(),
            comments: comments.into(),
        }
    }
}
