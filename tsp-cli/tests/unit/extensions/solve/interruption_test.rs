use super::*;

#[test]
fn can_create_quota_which_is_not_reached_initially() {
    let quota = create_interruption_quota(None);

    assert!(!quota.is_reached());
}

#[test]
fn can_create_quota_many_times() {
    let first = create_interruption_quota(Some(3600.));
    let second = create_interruption_quota(Some(3600.));

    assert!(!first.is_reached());
    assert!(!second.is_reached());
}

#[test]
fn can_reach_time_quota() {
    let quota = create_interruption_quota(Some(0.));

    std::thread::sleep(std::time::Duration::from_millis(5));

    assert!(quota.is_reached());
}
