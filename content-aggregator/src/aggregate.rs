//! Aggregate result types.
//!
//! A [`SourceOutcome`] is a tagged variant rather than a placeholder string,
//! so callers can distinguish "no data available" from a record that happens
//! to be named that way.

use std::fmt;

use crate::error::FetchError;
use crate::source::{Comment, Post, UserProfile};

/// Outcome of one source within an aggregate: the fetched payload or an
/// explicit "no data available" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome<T> {
    /// The source delivered its payload.
    Fetched(T),
    /// The source failed and no data is available.
    NotFound,
}

impl<T> SourceOutcome<T> {
    /// Returns `true` for a fetched payload.
    pub fn is_fetched(&self) -> bool {
        matches!(self, SourceOutcome::Fetched(_))
    }

    /// Returns the payload, if fetched.
    pub fn as_fetched(&self) -> Option<&T> {
        match self {
            SourceOutcome::Fetched(payload) => Some(payload),
            SourceOutcome::NotFound => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for SourceOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => SourceOutcome::Fetched(payload),
            Err(_) => SourceOutcome::NotFound,
        }
    }
}

/// The merged result of one orchestration run.
///
/// All three fields are always populated with a payload or the sentinel;
/// a partially filled aggregate is never observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateContent {
    /// User profiles, or the sentinel if the source failed.
    pub users: SourceOutcome<Vec<UserProfile>>,
    /// Posts, or the sentinel if the source failed.
    pub posts: SourceOutcome<Vec<Post>>,
    /// Comments, or the sentinel if the source failed.
    pub comments: SourceOutcome<Vec<Comment>>,
}

impl AggregateContent {
    /// Returns `true` if all three sources delivered payloads.
    pub fn is_complete(&self) -> bool {
        self.users.is_fetched() && self.posts.is_fetched() && self.comments.is_fetched()
    }
}

fn fmt_outcome<T>(f: &mut fmt::Formatter<'_>, outcome: &SourceOutcome<Vec<T>>) -> fmt::Result {
    match outcome {
        SourceOutcome::Fetched(records) => write!(f, "{} record(s)", records.len()),
        SourceOutcome::NotFound => write!(f, "data not found"),
    }
}

impl fmt::Display for AggregateContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "users: ")?;
        fmt_outcome(f, &self.users)?;
        write!(f, ", posts: ")?;
        fmt_outcome(f, &self.posts)?;
        write!(f, ", comments: ")?;
        fmt_outcome(f, &self.comments)
    }
}
