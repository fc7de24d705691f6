pub mod grid;

pub use grid::{
    build_month_grid, displayable_month, CalendarDay, Dated, MonthGrid, MAX_VISIBLE_EVENTS,
};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next = add_months(date, 1);
    if next == first_of_month(date) {
        // Saturated at the last representable month.
        return NaiveDate::MAX;
    }
    next - Duration::days(1)
}

/// First day of the month `delta` months away from `date`'s month.
///
/// Saturates at the first (or last) representable month.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let index = i64::from(first.year()) * 12 + i64::from(first.month0()) + i64::from(delta);
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12);
    i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1))
        .unwrap_or(first)
}

/// Sunday-based column (0..=6) of a weekday.
pub fn week_column(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
