use content_aggregator::{SimWorld, SimulationError, TimeProvider};
use std::time::Duration;

#[test]
fn sleep_advances_logical_time() {
    let mut sim = SimWorld::new();
    let time = sim.time_provider();

    assert_eq!(sim.current_time(), Duration::ZERO);

    sim.run_until_complete(async move { time.sleep(Duration::from_millis(100)).await })
        .expect("driver")
        .expect("sleep");

    assert_eq!(sim.current_time(), Duration::from_millis(100));
}

#[test]
fn sequential_sleeps_accumulate() {
    let mut sim = SimWorld::new();
    let time = sim.time_provider();

    sim.run_until_complete(async move {
        time.sleep(Duration::from_millis(50)).await?;
        time.sleep(Duration::from_millis(30)).await
    })
    .expect("driver")
    .expect("sleep");

    assert_eq!(sim.current_time(), Duration::from_millis(80));
}

#[test]
fn concurrent_sleeps_advance_to_latest() {
    let mut sim = SimWorld::new();
    let time = sim.time_provider();

    let (r1, r2, r3) = sim
        .run_until_complete(async move {
            tokio::join!(
                time.sleep(Duration::from_millis(100)),
                time.sleep(Duration::from_millis(50)),
                time.sleep(Duration::from_millis(150)),
            )
        })
        .expect("driver");

    assert!(r1.is_ok());
    assert!(r2.is_ok());
    assert!(r3.is_ok());

    // Concurrent timers advance time to the latest wake, not the sum.
    assert_eq!(sim.current_time(), Duration::from_millis(150));
}

#[test]
fn zero_duration_sleep_completes_at_current_time() {
    let mut sim = SimWorld::new();
    let time = sim.time_provider();

    sim.run_until_complete(async move { time.sleep(Duration::ZERO).await })
        .expect("driver")
        .expect("sleep");

    assert_eq!(sim.current_time(), Duration::ZERO);
}

#[tokio::test]
async fn sleep_future_completes_after_event_processing() {
    let mut sim = SimWorld::new();

    let sleep_future = sim.sleep(Duration::from_millis(100));
    assert_eq!(sim.pending_event_count(), 1);

    sim.run_until_empty();
    assert_eq!(sim.current_time(), Duration::from_millis(100));

    // The future resolves immediately once its wake event was processed.
    sleep_future.await.expect("sleep");
}

#[tokio::test]
async fn sleep_future_fails_when_world_is_dropped() {
    let sim = SimWorld::new();

    let sleep_future = sim.sleep(Duration::from_millis(100));
    drop(sim);

    assert_eq!(
        sleep_future.await,
        Err(SimulationError::SimulationShutdown)
    );
}

#[test]
fn task_ids_are_unique() {
    let sim = SimWorld::new();

    let _sleep1 = sim.sleep(Duration::from_millis(10));
    let _sleep2 = sim.sleep(Duration::from_millis(20));
    let _sleep3 = sim.sleep(Duration::from_millis(30));

    // One wake event per sleep; reused ids would collapse entries.
    assert_eq!(sim.pending_event_count(), 3);
}
