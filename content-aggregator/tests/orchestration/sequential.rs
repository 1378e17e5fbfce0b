use content_aggregator::{ClientConfig, SourceOutcome};
use std::time::Duration;

use crate::util::sim_aggregator;

#[test]
fn sequential_latency_is_sum_of_delays() {
    let (mut sim, aggregator) = sim_aggregator(ClientConfig::reliable(), 3);

    let aggregate = sim
        .run_until_complete(aggregator.sequential())
        .expect("driver");

    assert!(aggregate.is_complete());
    // 1000 + 1500 + 2000
    assert_eq!(sim.current_time(), Duration::from_millis(4500));
}

#[test]
fn one_failing_source_degrades_to_sentinel_without_aborting() {
    let mut config = ClientConfig::reliable();
    config.posts.failure_probability = 1.0;
    let (mut sim, aggregator) = sim_aggregator(config, 4);

    let aggregate = sim
        .run_until_complete(aggregator.sequential())
        .expect("driver");

    assert!(aggregate.users.is_fetched());
    assert_eq!(aggregate.posts, SourceOutcome::NotFound);
    assert!(aggregate.comments.is_fetched());

    // The failing step still paid its full latency: all three were attempted.
    assert_eq!(sim.current_time(), Duration::from_millis(4500));
}

#[test]
fn all_sources_failing_yields_all_sentinels() {
    let mut config = ClientConfig::reliable();
    config.users.failure_probability = 1.0;
    config.posts.failure_probability = 1.0;
    config.comments.failure_probability = 1.0;
    let (mut sim, aggregator) = sim_aggregator(config, 5);

    let aggregate = sim
        .run_until_complete(aggregator.sequential())
        .expect("driver");

    assert_eq!(aggregate.users, SourceOutcome::NotFound);
    assert_eq!(aggregate.posts, SourceOutcome::NotFound);
    assert_eq!(aggregate.comments, SourceOutcome::NotFound);
    assert_eq!(sim.current_time(), Duration::from_millis(4500));
}

#[test]
fn progress_variant_matches_plain_sequential() {
    let (mut sim1, aggregator1) = sim_aggregator(ClientConfig::reliable(), 6);
    let plain = sim1
        .run_until_complete(aggregator1.sequential())
        .expect("driver");

    let (mut sim2, aggregator2) = sim_aggregator(ClientConfig::reliable(), 6);
    let verbose = sim2
        .run_until_complete(aggregator2.sequential_with_progress())
        .expect("driver");

    assert_eq!(plain, verbose);
    assert_eq!(sim1.current_time(), sim2.current_time());
}

#[test]
fn progress_variant_degrades_failures_to_sentinels() {
    let mut config = ClientConfig::reliable();
    config.comments.failure_probability = 1.0;
    let (mut sim, aggregator) = sim_aggregator(config, 7);

    let aggregate = sim
        .run_until_complete(aggregator.sequential_with_progress())
        .expect("driver");

    assert!(aggregate.users.is_fetched());
    assert!(aggregate.posts.is_fetched());
    assert_eq!(aggregate.comments, SourceOutcome::NotFound);
}
