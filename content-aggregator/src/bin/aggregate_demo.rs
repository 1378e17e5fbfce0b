//! Demo binary running every orchestration mode against real Tokio timers.
//!
//! Progress goes through the tracing subscriber; final aggregates are printed
//! to stdout. Latencies are scaled down so a full run takes well under a
//! second.

use std::time::Duration;

use content_aggregator::{
    Aggregator, ClientConfig, ContentClient, SourceProfile, ThreadRngProvider, TokioTimeProvider,
};

fn demo_config(failures: bool) -> ClientConfig {
    let probability = |p: f64| if failures { p } else { 0.0 };
    ClientConfig {
        users: SourceProfile {
            latency: Duration::from_millis(100),
            failure_probability: probability(0.4),
        },
        posts: SourceProfile {
            latency: Duration::from_millis(150),
            failure_probability: probability(0.3),
        },
        comments: SourceProfile {
            latency: Duration::from_millis(200),
            failure_probability: probability(0.3),
        },
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // Current-thread runtime: all futures in this crate are !Send.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build runtime");

    runtime.block_on(async {
        let time = TokioTimeProvider::new();
        let random = ThreadRngProvider::new();

        let reliable = Aggregator::new(ContentClient::new(
            time.clone(),
            random.clone(),
            demo_config(false),
        ));
        let flaky = Aggregator::new(ContentClient::new(time, random, demo_config(true)));

        let content = reliable.sequential_with_progress().await;
        println!("sequential (reliable sources): {content}");

        let content = flaky.sequential().await;
        println!("sequential fail-soft (flaky sources): {content}");

        match flaky.parallel_fail_fast().await {
            Ok(content) => println!("parallel fail-fast: {content}"),
            Err(err) => println!("parallel fail-fast aborted: {err}"),
        }

        let content = flaky.parallel_best_effort().await;
        println!("parallel best-effort: {content}");
    });
}
