use chrono::NaiveDate;

use crate::calendar::{add_months, build_month_grid, displayable_month, Dated, MonthGrid};

/// Displayed month plus the single selected day. The two move independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    month: NaiveDate,
    selected: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate, initial_selection: NaiveDate) -> Self {
        Self {
            month: displayable_month(today),
            selected: initial_selection,
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn next_month(&mut self) {
        self.month = displayable_month(add_months(self.month, 1));
    }

    pub fn previous_month(&mut self) {
        self.month = displayable_month(add_months(self.month, -1));
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.month = displayable_month(today);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn grid<T: Dated + Clone>(&self, items: &[T], today: NaiveDate) -> MonthGrid<T> {
        build_month_grid(self.month, today, items)
    }
}
