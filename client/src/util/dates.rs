//! Calendar helpers for badge validity windows.
//!
//! Month arithmetic clamps to the last day of the target month, so a badge
//! issued on Jan 31 with one month of validity expires on Feb 28/29.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::{Date, Month};

const INPUT_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Add `months` calendar months to `date`, rolling the year over as needed.
///
/// Returns `None` when the result leaves the representable date range.
#[must_use]
pub fn checked_add_months(date: Date, months: u32) -> Option<Date> {
    let month_index = (u32::from(u8::from(date.month())) - 1).checked_add(months)?;
    let year = date.year().checked_add(i32::try_from(month_index / 12).ok()?)?;
    let month = Month::try_from(u8::try_from(month_index % 12 + 1).ok()?).ok()?;
    let last_day = days_in_month(year, month)?;
    Date::from_calendar_date(year, month, date.day().min(last_day)).ok()
}

fn days_in_month(year: i32, month: Month) -> Option<u8> {
    (28..=31)
        .rev()
        .find(|&day| Date::from_calendar_date(year, month, day).is_ok())
}

/// Expiry of a badge issued on `issued` that stays valid for `validity_months`.
#[must_use]
pub fn expiry_date(issued: Date, validity_months: u32) -> Date {
    checked_add_months(issued, validity_months).unwrap_or(Date::MAX)
}

/// Whether a badge issued on `issued` has lapsed as of `today`.
#[must_use]
pub fn is_expired(issued: Date, validity_months: u32, today: Date) -> bool {
    today > expiry_date(issued, validity_months)
}

/// Render a date the way the portal displays it (`dd/mm/yyyy`).
#[must_use]
pub fn format_br(date: Date) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), u8::from(date.month()), date.year())
}

/// Render a date as an HTML `<input type="date">` value.
#[must_use]
pub fn format_input(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse an HTML `<input type="date">` value (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns the parse error when `value` is not a valid calendar date.
pub fn parse_input(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), INPUT_FORMAT)
}

/// Current local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => Date::from_calendar_date(y, m, d).unwrap_or(Date::MIN),
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
