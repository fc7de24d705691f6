use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashMap;

use super::{
    add_months, first_of_month, last_of_month, month_label, same_month, week_column, DAYS_PER_WEEK,
};
use crate::types::Event;

/// Events shown inside a single cell; the rest collapse into "+N more".
pub const MAX_VISIBLE_EVENTS: usize = 2;

/// Anything that can be placed on a calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<T> {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub events: Vec<T>,
}

impl<T> CalendarDay<T> {
    pub fn visible_events(&self) -> &[T] {
        &self.events[..self.events.len().min(MAX_VISIBLE_EVENTS)]
    }

    pub fn overflow_count(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<T> {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub days: Vec<CalendarDay<T>>,
}

impl<T> MonthGrid<T> {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay<T>]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn row_count(&self) -> usize {
        self.days.len() / DAYS_PER_WEEK
    }

    pub fn month_label(&self) -> String {
        month_label(self.month)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay<T>> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// First cell and cell count of the padded grid for `first`, or `None` when
/// the padding would leave chrono's representable range.
fn grid_span(first: NaiveDate) -> Option<(NaiveDate, usize)> {
    let last = last_of_month(first);
    let leading = week_column(first.weekday());
    let trailing = DAYS_PER_WEEK - 1 - week_column(last.weekday());
    let start = first.checked_sub_days(Days::new(leading as u64))?;
    last.checked_add_days(Days::new(trailing as u64))?;
    Some((start, leading + last.day() as usize + trailing))
}

/// Nearest month to `reference` whose whole-week grid is representable,
/// with its first cell and cell count.
fn displayable_span(reference: NaiveDate) -> (NaiveDate, NaiveDate, usize) {
    let mut month = first_of_month(reference);
    let step = if month.year() < 0 { 1 } else { -1 };
    loop {
        if let Some((start, cell_count)) = grid_span(month) {
            return (month, start, cell_count);
        }
        month = add_months(month, step);
    }
}

/// First day of the month `build_month_grid` would show for `reference`.
/// Only the two outermost months of chrono's range are pulled inwards.
pub fn displayable_month(reference: NaiveDate) -> NaiveDate {
    displayable_span(reference).0
}

/// Lays out the month containing `reference` as whole Sunday-first weeks,
/// padding with days from the adjacent months, and buckets `items` onto
/// their days in their original order.
pub fn build_month_grid<T>(reference: NaiveDate, today: NaiveDate, items: &[T]) -> MonthGrid<T>
where
    T: Dated + Clone,
{
    let (first, start, cell_count) = displayable_span(reference);

    let mut buckets: HashMap<NaiveDate, Vec<T>> = HashMap::new();
    for item in items {
        buckets.entry(item.date()).or_default().push(item.clone());
    }

    let days = start
        .iter_days()
        .take(cell_count)
        .map(|date| CalendarDay {
            date,
            in_current_month: same_month(date, first),
            is_today: date == today,
            events: buckets.remove(&date).unwrap_or_default(),
        })
        .collect();

    MonthGrid { month: first, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(id: u64, date: NaiveDate) -> Event {
        Event {
            id,
            title: format!("Event {id}"),
            date,
            location: "Common room".into(),
        }
    }

    #[test]
    fn march_2026_fits_five_rows_without_leading_filler() {
        let grid = build_month_grid::<Event>(d(2026, 3, 10), d(2026, 3, 10), &[]);
        assert_eq!(grid.days.len(), 35);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.days[0].date, d(2026, 3, 1));
        assert!(grid.days[0].in_current_month);
        let trailing: Vec<_> = grid.days.iter().filter(|day| !day.in_current_month).collect();
        assert_eq!(trailing.len(), 4);
        assert_eq!(trailing[0].date, d(2026, 4, 1));
        assert_eq!(grid.days[34].date, d(2026, 4, 4));
    }

    #[test]
    fn august_2026_needs_a_sixth_row() {
        let grid = build_month_grid::<Event>(d(2026, 8, 1), d(2026, 8, 1), &[]);
        assert_eq!(grid.days.len(), 42);
        assert_eq!(grid.days[0].date, d(2026, 7, 26));
        assert_eq!(grid.days[41].date, d(2026, 9, 5));
    }

    #[test]
    fn february_2026_is_exactly_four_rows() {
        let grid = build_month_grid::<Event>(d(2026, 2, 14), d(2026, 1, 1), &[]);
        assert_eq!(grid.row_count(), 4);
        assert!(grid.days.iter().all(|day| day.in_current_month));
    }

    #[test]
    fn grid_covers_whole_weeks_for_every_month_of_two_years() {
        for year in [2025, 2026] {
            for month in 1..=12 {
                let reference = d(year, month, 1);
                let grid = build_month_grid::<Event>(reference, reference, &[]);
                assert_eq!(grid.days.len() % DAYS_PER_WEEK, 0);
                assert_eq!(grid.days.first().unwrap().date.weekday(), Weekday::Sun);
                assert_eq!(grid.days.last().unwrap().date.weekday(), Weekday::Sat);
                assert!(grid.day(reference).is_some());
                assert!(grid.day(last_of_month(reference)).is_some());
                for day in &grid.days {
                    assert_eq!(day.in_current_month, same_month(day.date, reference));
                }
                for week in grid.weeks() {
                    assert_eq!(week.len(), DAYS_PER_WEEK);
                }
            }
        }
    }

    #[test]
    fn only_today_is_flagged() {
        let today = d(2026, 3, 18);
        let grid = build_month_grid::<Event>(d(2026, 3, 1), today, &[]);
        let flagged: Vec<_> = grid.days.iter().filter(|day| day.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);

        let other = build_month_grid::<Event>(d(2026, 5, 1), today, &[]);
        assert!(other.days.iter().all(|day| !day.is_today));
    }

    #[test]
    fn buckets_events_in_original_order_and_counts_overflow() {
        let busy = d(2026, 3, 20);
        let events = vec![
            event(1, busy),
            event(2, d(2026, 3, 2)),
            event(3, busy),
            event(4, busy),
            event(5, busy),
            event(6, d(2026, 6, 1)),
        ];
        let grid = build_month_grid(d(2026, 3, 1), d(2026, 3, 1), &events);

        let day = grid.day(busy).unwrap();
        let ids: Vec<u64> = day.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(day.visible_events().len(), 2);
        assert_eq!(day.visible_events()[1].id, 3);
        assert_eq!(day.overflow_count(), 2);

        let quiet = grid.day(d(2026, 3, 2)).unwrap();
        assert_eq!(quiet.overflow_count(), 0);
        assert_eq!(quiet.visible_events().len(), 1);

        let placed: usize = grid.days.iter().map(|day| day.events.len()).sum();
        assert_eq!(placed, 5);
    }

    #[test]
    fn filler_days_carry_their_events() {
        let events = vec![event(9, d(2026, 4, 2))];
        let grid = build_month_grid(d(2026, 3, 1), d(2026, 3, 1), &events);
        let filler = grid.day(d(2026, 4, 2)).unwrap();
        assert!(!filler.in_current_month);
        assert_eq!(filler.events.len(), 1);
    }

    #[test]
    fn latest_month_stays_whole_weeks() {
        let grid = build_month_grid::<Event>(NaiveDate::MAX, NaiveDate::MAX, &[]);
        assert_eq!(grid.days.len() % DAYS_PER_WEEK, 0);
        assert!(grid.month < first_of_month(NaiveDate::MAX));
        assert_eq!(grid.month, displayable_month(NaiveDate::MAX));
        assert!(grid.days.iter().all(|day| day.date <= NaiveDate::MAX));
        assert_eq!(grid.days[0].date.weekday(), Weekday::Sun);
    }

    #[test]
    fn earliest_month_does_not_underflow() {
        let reference = add_months(NaiveDate::MIN, -1);
        let grid = build_month_grid::<Event>(reference, NaiveDate::MIN, &[]);
        assert_eq!(grid.days.len() % DAYS_PER_WEEK, 0);
        assert!(grid.month > first_of_month(NaiveDate::MIN));
        assert_eq!(grid.days[0].date.weekday(), Weekday::Sun);
        assert!(grid.day(last_of_month(grid.month)).is_some());
    }

    #[test]
    fn ordinary_months_are_displayed_as_is() {
        assert_eq!(displayable_month(d(2026, 3, 18)), d(2026, 3, 1));
        assert_eq!(displayable_month(d(-44, 3, 15)), d(-44, 3, 1));
    }
}
