use super::*;

#[test]
fn new_lifetime_is_alive() {
    assert!(!MountLifetime::new().is_cancelled());
}

#[test]
fn cancel_is_seen_by_clones() {
    let lifetime = MountLifetime::new();
    let task_copy = lifetime.clone();
    lifetime.cancel();
    assert!(task_copy.is_cancelled());
}

#[test]
fn cancel_twice_stays_cancelled() {
    let lifetime = MountLifetime::default();
    lifetime.cancel();
    lifetime.cancel();
    assert!(lifetime.is_cancelled());
}
