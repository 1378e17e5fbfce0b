use content_aggregator::{AggregateContent, ClientConfig};

use crate::util::sim_aggregator;

fn assert_referential_integrity(aggregate: &AggregateContent) {
    let users = aggregate.users.as_fetched().expect("users");
    let posts = aggregate.posts.as_fetched().expect("posts");
    let comments = aggregate.comments.as_fetched().expect("comments");

    assert_eq!(users.len(), 3);
    assert_eq!(posts.len(), 3);
    assert_eq!(comments.len(), 3);

    for user in users {
        assert!(!user.name.is_empty());
    }
    for post in posts {
        assert!(
            users.iter().any(|user| user.id == post.user_id),
            "post {} references unknown user {}",
            post.id,
            post.user_id
        );
    }
    for comment in comments {
        assert!(
            posts.iter().any(|post| post.id == comment.post_id),
            "comment {} references unknown post {}",
            comment.id,
            comment.post_id
        );
    }
}

#[test]
fn all_modes_agree_when_every_source_succeeds() {
    let (mut sim, aggregator) = sim_aggregator(ClientConfig::reliable(), 20);

    // The aggregator runs with the configuration it was handed.
    assert_eq!(*aggregator.client().config(), ClientConfig::reliable());

    let sequential = sim
        .run_until_complete(aggregator.sequential())
        .expect("driver");
    let verbose = sim
        .run_until_complete(aggregator.sequential_with_progress())
        .expect("driver");
    let fail_fast = sim
        .run_until_complete(aggregator.parallel_fail_fast())
        .expect("driver")
        .expect("aggregate");
    let best_effort = sim
        .run_until_complete(aggregator.parallel_best_effort())
        .expect("driver");

    assert_referential_integrity(&sequential);
    assert_eq!(sequential, verbose);
    assert_eq!(sequential, fail_fast);
    assert_eq!(sequential, best_effort);
}
