use super::*;
use crate::net::mock;
use time::macros::date;

#[test]
fn is_open_includes_both_window_ends() {
    let badge = &mock::badges()[0];
    assert!(is_open(badge, date!(2024 - 01 - 01)));
    assert!(is_open(badge, date!(2024 - 12 - 31)));
    assert!(is_open(badge, date!(2024 - 06 - 15)));
}

#[test]
fn is_open_rejects_dates_outside_window() {
    let badge = &mock::badges()[0];
    assert!(!is_open(badge, date!(2023 - 12 - 31)));
    assert!(!is_open(badge, date!(2025 - 01 - 01)));
}
