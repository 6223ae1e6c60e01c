use super::{Preloader, ReadinessBarrier, ReadySignal};
use itertools::Itertools;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

#[tokio::test]
async fn any_completion_order_releases_exactly_once() {
    for perm in ReadySignal::iter().permutations(ReadySignal::iter().count()) {
        let barrier = ReadinessBarrier::new();
        for (fired, signal) in perm.iter().enumerate() {
            assert!(!barrier.is_ready(), "released after only {fired} signals ({perm:?})");
            barrier.complete(*signal);
        }
        assert!(barrier.is_ready(), "not released after full set ({perm:?})");
        barrier.all_ready().await;
    }
}

#[tokio::test]
async fn proper_subset_never_releases() {
    let barrier = ReadinessBarrier::new();
    barrier.complete(ReadySignal::Timeline);
    barrier.complete(ReadySignal::Astronauts);
    barrier.complete(ReadySignal::GlobeScene);
    barrier.complete(ReadySignal::BudgetBoard);
    assert!(!barrier.is_ready());

    let wait = tokio::time::timeout(Duration::from_millis(50), barrier.all_ready()).await;
    assert!(wait.is_err(), "barrier released with SplashFloor outstanding");
}

#[tokio::test]
async fn duplicate_firing_does_not_count_as_distinct() {
    let barrier = ReadinessBarrier::new();
    for _ in 0..4 {
        barrier.complete(ReadySignal::Timeline);
    }
    barrier.complete(ReadySignal::Astronauts);
    barrier.complete(ReadySignal::GlobeScene);
    barrier.complete(ReadySignal::BudgetBoard);
    assert!(!barrier.is_ready());

    barrier.complete(ReadySignal::SplashFloor);
    assert!(barrier.is_ready());
}

#[tokio::test]
async fn failed_signal_still_releases_the_gate() {
    let barrier = ReadinessBarrier::new();
    barrier.complete_failed(ReadySignal::GlobeScene, &"connection refused");
    barrier.complete(ReadySignal::Timeline);
    barrier.complete(ReadySignal::Astronauts);
    barrier.complete(ReadySignal::BudgetBoard);
    barrier.complete(ReadySignal::SplashFloor);
    assert!(barrier.is_ready());
    barrier.all_ready().await;
}

#[tokio::test]
async fn waiter_parked_until_last_signal_fires() {
    let barrier = Arc::new(ReadinessBarrier::new());
    let waiter_barrier = Arc::clone(&barrier);
    let waiter = tokio::spawn(async move { waiter_barrier.all_ready().await });

    for signal in ReadySignal::iter() {
        assert!(!waiter.is_finished());
        tokio::time::sleep(Duration::from_millis(5)).await;
        barrier.complete(signal);
    }
    waiter.await.unwrap();
}

#[tokio::test]
async fn reveal_is_claimed_by_exactly_one_caller() {
    let preloader = Preloader::new();
    let barrier = preloader.barrier();
    for signal in ReadySignal::iter() {
        barrier.complete(signal);
    }
    assert!(preloader.reveal().await);
    assert!(!preloader.reveal().await, "reveal transition ran twice");
    assert!(preloader.is_revealed());
}

#[tokio::test]
async fn splash_floor_holds_the_gate_for_its_duration() {
    let preloader = Preloader::new();
    let barrier = preloader.barrier();
    barrier.complete(ReadySignal::Timeline);
    barrier.complete(ReadySignal::Astronauts);
    barrier.complete(ReadySignal::GlobeScene);
    barrier.complete(ReadySignal::BudgetBoard);
    assert!(!barrier.is_ready());

    preloader.arm_splash_floor();
    let early = tokio::time::timeout(Duration::from_millis(100), barrier.all_ready()).await;
    assert!(early.is_err(), "gate opened before the splash floor elapsed");
    assert!(preloader.reveal().await);
}
