#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_public_outside_browser() {
    assert_eq!(read_preference(), Theme::Public);
}

#[test]
fn apply_and_store_are_noops_but_callable() {
    apply(Theme::Monitoring);
    store(Theme::Public);
}
