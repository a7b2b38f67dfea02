use super::*;
use leptos::prelude::Owner;

#[test]
fn guard_starts_alive() {
    assert!(PollGuard::new().is_alive());
    assert!(PollGuard::default().is_alive());
}

#[test]
fn stop_is_idempotent() {
    let guard = PollGuard::new();
    guard.stop();
    guard.stop();
    assert!(!guard.is_alive());
}

#[test]
fn clones_share_the_flag() {
    let guard = PollGuard::new();
    let loop_side = guard.clone();
    guard.stop();
    assert!(!loop_side.is_alive());
}

#[test]
fn owner_cleanup_stops_the_poll() {
    let owner = Owner::new();
    let guard = owner.with(|| poll_every(Duration::from_secs(5), || async {}));
    assert!(guard.is_alive());
    owner.cleanup();
    assert!(!guard.is_alive());
}

#[test]
fn cleanup_of_one_owner_leaves_other_polls_running() {
    let first = Owner::new();
    let second = Owner::new();
    let first_guard = first.with(|| poll_every(Duration::from_secs(5), || async {}));
    let second_guard = second.with(|| poll_every(Duration::from_secs(30), || async {}));
    first.cleanup();
    assert!(!first_guard.is_alive());
    assert!(second_guard.is_alive());
    second.cleanup();
    assert!(!second_guard.is_alive());
}
