//! dates.rs
//!
//! Maps plan day numbers onto calendar dates for display.
//!
//! A reading plan is anchored by an optional start date; day 1 falls on the
//! start date itself and day N on start + (N - 1) days. Two Korean display
//! forms are provided, matching how the reading view labels a day:
//!
//! - long: `"8월 23일 (토)"`,
//! - short: `"8.23"`.
//!
//! Without a start date (or past the calendar's range) the plain day-number
//! labels `"Day 17"` / `"17"` are used instead.

use chrono::{Datelike, Days, NaiveDate, Weekday};

// Korean single-character weekday labels, Sunday first.
const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_sunday() as usize]
}

/// The calendar date of plan day `day` (1-based) for a plan starting on
/// `start`. Day 0 is treated like day 1. Returns `None` only when the date
/// arithmetic leaves chrono's range.
///
/// ```
/// # use bible_reading_plan::dates::plan_date;
/// # use chrono::NaiveDate;
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(plan_date(start, 1), Some(start));
/// assert_eq!(plan_date(start, 31), NaiveDate::from_ymd_opt(2024, 1, 31));
/// assert_eq!(plan_date(start, 32), NaiveDate::from_ymd_opt(2024, 2, 1));
/// ```
pub fn plan_date(start: NaiveDate, day: u32) -> Option<NaiveDate> {
    let offset = u64::from(day.saturating_sub(1));
    start.checked_add_days(Days::new(offset))
}

/// Plain fallback label used when no start date applies, e.g. `"Day 17"`.
pub fn day_label(day: u32) -> String {
    format!("Day {}", day)
}

/// Long Korean date label for a plan day, e.g. `"3월 1일 (금)"`. Falls back
/// to [`day_label`] when the date cannot be computed.
///
/// ```
/// # use bible_reading_plan::dates::display_date;
/// # use chrono::NaiveDate;
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // a Monday
/// assert_eq!(display_date(start, 1), "1월 1일 (월)");
/// assert_eq!(display_date(start, 7), "1월 7일 (일)");
/// ```
pub fn display_date(start: NaiveDate, day: u32) -> String {
    match plan_date(start, day) {
        Some(date) => format!(
            "{}월 {}일 ({})",
            date.month(),
            date.day(),
            weekday_label(date.weekday())
        ),
        None => day_label(day),
    }
}

/// Short numeric date label for a plan day, e.g. `"3.1"`. Falls back to the
/// bare day number when the date cannot be computed.
pub fn display_date_short(start: NaiveDate, day: u32) -> String {
    match plan_date(start, day) {
        Some(date) => format!("{}.{}", date.month(), date.day()),
        None => day.to_string(),
    }
}
