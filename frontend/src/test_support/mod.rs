#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::rc::Rc;

    use crate::mock::SeedData;
    use crate::state::{provide_app_context, AppContext};
    use crate::types::{Event, LeaveRequest, LeaveStatus, Notice, NoticeKind, Priority, Task};
    use crate::utils::time::FixedClock;

    pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    /// 2026-03-18 10:00 UTC.
    pub fn fixed_clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 18, 10, 0, 0).unwrap())
    }

    fn task(id: u64, title: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            title: title.into(),
            priority,
            completed,
        }
    }

    fn notice(id: u64, title: &str, kind: NoticeKind) -> Notice {
        Notice {
            id,
            title: title.into(),
            content: format!("Details about {}", title.to_lowercase()),
            date: "1 day ago".into(),
            kind,
        }
    }

    fn event(id: u64, title: &str, date: NaiveDate) -> Event {
        Event {
            id,
            title: title.into(),
            date,
            location: "Common Room".into(),
        }
    }

    pub fn fixture_seed() -> SeedData {
        SeedData {
            tasks: vec![
                task(1, "Pay hostel fees", Priority::High, false),
                task(2, "Clean room", Priority::Medium, true),
                task(3, "Return library books", Priority::Low, false),
            ],
            notices: vec![
                notice(1, "Water outage", NoticeKind::Urgent),
                notice(2, "Mess timings", NoticeKind::Info),
                notice(3, "Curfew reminder", NoticeKind::Warning),
            ],
            events: vec![
                event(1, "Welcome Mixer", d(2026, 3, 6)),
                event(2, "Fire Drill", d(2026, 3, 12)),
                event(3, "Movie Night", d(2026, 3, 15)),
                event(4, "Residents Meeting", d(2026, 3, 15)),
                event(5, "Room Inspection", d(2026, 4, 2)),
                event(6, "Cultural Night", d(2026, 3, 27)),
            ],
            leave_requests: vec![LeaveRequest {
                id: 1,
                reason: "Family function".into(),
                departure_date: "2026-02-10".into(),
                return_date: "2026-02-14".into(),
                status: LeaveStatus::Approved,
                applied_date: d(2026, 2, 1),
            }],
        }
    }

    /// Provides a context over the fixture seed with the fixed clock.
    /// Must run inside a reactive runtime.
    pub fn provide_fixture_context() -> AppContext {
        provide_app_context(AppContext::new(
            Rc::new(fixed_clock()),
            fixture_seed(),
            d(2026, 3, 15),
        ))
    }
}
