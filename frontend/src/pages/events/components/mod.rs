pub mod calendar_grid;
pub mod day_detail;

pub use calendar_grid::CalendarGrid;
pub use day_detail::{DayDetail, UpcomingEvents};
