//! Record types served by the mock content sources.

/// A user profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Numeric identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// A post record, authored by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Numeric identifier.
    pub id: u64,
    /// Id of the authoring user.
    pub user_id: u64,
    /// Post title.
    pub title: String,
}

/// A comment record, attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Numeric identifier.
    pub id: u64,
    /// Id of the post this comment belongs to.
    pub post_id: u64,
    /// Comment text.
    pub body: String,
}

/// The fixed user payload.
pub(crate) fn sample_users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: 1,
            name: "Alice".to_string(),
        },
        UserProfile {
            id: 2,
            name: "Bob".to_string(),
        },
        UserProfile {
            id: 3,
            name: "Charlie".to_string(),
        },
    ]
}

/// The fixed post payload. Each post references one of the sample users.
pub(crate) fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            user_id: 1,
            title: "Post 1".to_string(),
        },
        Post {
            id: 2,
            user_id: 2,
            title: "Post 2".to_string(),
        },
        Post {
            id: 3,
            user_id: 3,
            title: "Post 3".to_string(),
        },
    ]
}

/// The fixed comment payload. Each comment references one of the sample posts.
pub(crate) fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            post_id: 1,
            body: "Great post!".to_string(),
        },
        Comment {
            id: 2,
            post_id: 2,
            body: "Interesting read".to_string(),
        },
        Comment {
            id: 3,
            post_id: 3,
            body: "Thanks for sharing".to_string(),
        },
    ]
}
