use super::*;
use time::macros::date;

// =============================================================
// Month arithmetic
// =============================================================

#[test]
fn expiry_within_same_year() {
    assert_eq!(expiry_date(date!(2024 - 03 - 15), 6), date!(2024 - 09 - 15));
}

#[test]
fn expiry_rolls_over_year_boundary() {
    assert_eq!(expiry_date(date!(2024 - 11 - 15), 3), date!(2025 - 02 - 15));
}

#[test]
fn expiry_twelve_months_is_same_day_next_year() {
    assert_eq!(expiry_date(date!(2024 - 04 - 01), 12), date!(2025 - 04 - 01));
}

#[test]
fn expiry_spanning_several_years() {
    assert_eq!(expiry_date(date!(2023 - 12 - 10), 25), date!(2026 - 01 - 10));
}

#[test]
fn zero_months_is_identity() {
    assert_eq!(expiry_date(date!(2024 - 02 - 29), 0), date!(2024 - 02 - 29));
}

#[test]
fn month_end_clamps_to_shorter_month() {
    assert_eq!(expiry_date(date!(2024 - 01 - 31), 1), date!(2024 - 02 - 29));
    assert_eq!(expiry_date(date!(2023 - 01 - 31), 1), date!(2023 - 02 - 28));
    assert_eq!(expiry_date(date!(2024 - 08 - 31), 1), date!(2024 - 09 - 30));
}

#[test]
fn checked_add_months_reports_overflow() {
    assert_eq!(checked_add_months(date!(9999 - 06 - 01), 12), None);
    assert_eq!(expiry_date(date!(9999 - 06 - 01), 12), Date::MAX);
}

// =============================================================
// Expiry checks
// =============================================================

#[test]
fn is_expired_only_after_expiry_day() {
    let issued = date!(2024 - 03 - 15);
    assert!(!is_expired(issued, 12, date!(2025 - 03 - 15)));
    assert!(is_expired(issued, 12, date!(2025 - 03 - 16)));
    assert!(!is_expired(issued, 12, date!(2024 - 06 - 01)));
}

// =============================================================
// Formatting and parsing
// =============================================================

#[test]
fn format_br_pads_day_and_month() {
    assert_eq!(format_br(date!(2025 - 02 - 05)), "05/02/2025");
}

#[test]
fn format_input_matches_html_date_value() {
    assert_eq!(format_input(date!(2024 - 12 - 31)), "2024-12-31");
}

#[test]
fn parse_input_accepts_iso_dates() {
    assert_eq!(parse_input("2024-01-01").unwrap(), date!(2024 - 01 - 01));
    assert_eq!(parse_input(" 2024-01-01 ").unwrap(), date!(2024 - 01 - 01));
}

#[test]
fn parse_input_rejects_garbage_and_impossible_dates() {
    assert!(parse_input("").is_err());
    assert!(parse_input("31/12/2024").is_err());
    assert!(parse_input("2023-02-29").is_err());
}

#[test]
fn today_is_representable() {
    assert!(today() > date!(2000 - 01 - 01));
}
