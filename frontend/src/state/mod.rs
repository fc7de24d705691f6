pub mod calendar;
pub mod leave;
pub mod tabs;
pub mod tasks;

use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

use crate::{
    config,
    error::ValidationError,
    mock::SeedData,
    types::{Event, Notice, NoticeKind},
    utils::time::{Clock, SystemClock},
};

pub use calendar::CalendarState;
pub use leave::{LeaveField, LeaveForm, LeaveHistory};
pub use tabs::Tab;
pub use tasks::{TaskFilter, TaskList};

/// Timestamp-derived identifier that does not collide with `existing`.
pub(crate) fn fresh_id(stamp: u64, existing: impl Iterator<Item = u64> + Clone) -> u64 {
    if existing.clone().any(|id| id == stamp) {
        existing.max().unwrap_or_default().saturating_add(1)
    } else {
        stamp
    }
}

/// All view state of the dashboard. Owned by the root component and
/// mutated only through these methods.
#[derive(Debug, Clone, PartialEq)]
pub struct HostelState {
    pub active_tab: Tab,
    pub sidebar_open: bool,
    pub tasks: TaskList,
    pub task_draft: String,
    pub task_filter: TaskFilter,
    pub notices: Vec<Notice>,
    pub notice_filter: Option<NoticeKind>,
    pub events: Vec<Event>,
    pub calendar: CalendarState,
    pub leave_form: LeaveForm,
    pub leave_history: LeaveHistory,
    pub leave_submitted: bool,
}

impl HostelState {
    pub fn from_seed(seed: SeedData, today: NaiveDate, initial_selection: NaiveDate) -> Self {
        Self {
            active_tab: Tab::default(),
            sidebar_open: false,
            tasks: TaskList::new(seed.tasks),
            task_draft: String::new(),
            task_filter: TaskFilter::default(),
            notices: seed.notices,
            notice_filter: None,
            events: seed.events,
            calendar: CalendarState::new(today, initial_selection),
            leave_form: LeaveForm::default(),
            leave_history: LeaveHistory::new(seed.leave_requests),
            leave_submitted: false,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.sidebar_open = false;
        self.leave_submitted = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_task(&mut self, id: u64) -> bool {
        self.tasks.toggle(id)
    }

    /// Adds the drafted task. The draft is kept when it is rejected.
    pub fn add_task_from_draft(&mut self, stamp: u64) -> Result<(), ValidationError> {
        self.tasks.add(&self.task_draft, stamp)?;
        self.task_draft.clear();
        Ok(())
    }

    pub fn set_leave_field(&mut self, field: LeaveField, value: String) {
        self.leave_form.set(field, value);
        self.leave_submitted = false;
    }

    pub fn submit_leave(&mut self, today: NaiveDate, stamp: u64) -> Result<(), ValidationError> {
        self.leave_history
            .submit(&mut self.leave_form, today, stamp)?;
        self.leave_submitted = true;
        Ok(())
    }

    pub fn visible_notices(&self) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|notice| self.notice_filter.map_or(true, |kind| notice.kind == kind))
            .collect()
    }

    /// Events dated `today` or later, soonest first; ties keep seed order.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.date >= today)
            .collect();
        upcoming.sort_by_key(|event| event.date);
        upcoming
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }
}

/// Root-owned state handle shared with every view through context.
#[derive(Clone)]
pub struct AppContext {
    pub state: RwSignal<HostelState>,
    pub clock: Rc<dyn Clock>,
}

impl AppContext {
    pub fn new(clock: Rc<dyn Clock>, seed: SeedData, initial_selection: NaiveDate) -> Self {
        let state = HostelState::from_seed(seed, clock.today(), initial_selection);
        Self {
            state: create_rw_signal(state),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn stamp(&self) -> u64 {
        self.clock.timestamp_millis()
    }
}

pub fn provide_app_context(ctx: AppContext) -> AppContext {
    provide_context(ctx.clone());
    ctx
}

pub fn use_app() -> AppContext {
    match use_context::<AppContext>() {
        Some(ctx) => ctx,
        None => provide_app_context(AppContext::new(
            Rc::new(SystemClock::from_config()),
            SeedData::load(),
            config::current().initial_selected_date,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{d, fixture_seed};
    use crate::types::LeaveStatus;

    fn state() -> HostelState {
        HostelState::from_seed(fixture_seed(), d(2026, 3, 18), d(2026, 3, 15))
    }

    #[test]
    fn fresh_id_prefers_the_stamp() {
        assert_eq!(fresh_id(900, [1u64, 2, 3].into_iter()), 900);
        assert_eq!(fresh_id(2, [1u64, 2, 3].into_iter()), 4);
        assert_eq!(fresh_id(5, std::iter::empty()), 5);
    }

    #[test]
    fn add_task_from_draft_clears_only_on_success() {
        let mut state = state();
        let before = state.tasks.len();

        state.task_draft = "   ".into();
        assert_eq!(
            state.add_task_from_draft(1),
            Err(ValidationError::BlankTitle)
        );
        assert_eq!(state.task_draft, "   ");
        assert_eq!(state.tasks.len(), before);

        state.task_draft = "Buy milk".into();
        state.add_task_from_draft(1_774_000_000_000).unwrap();
        assert!(state.task_draft.is_empty());
        assert_eq!(state.tasks.as_slice()[0].title, "Buy milk");
    }

    #[test]
    fn leave_acknowledgment_lifecycle() {
        let mut state = state();
        state.set_leave_field(LeaveField::Reason, "Trip".into());
        state.set_leave_field(LeaveField::DepartureDate, "2026-04-01".into());
        assert!(state.submit_leave(d(2026, 3, 18), 5).is_err());
        assert!(!state.leave_submitted);

        state.set_leave_field(LeaveField::ReturnDate, "2026-04-05".into());
        state.submit_leave(d(2026, 3, 18), 5).unwrap();
        assert!(state.leave_submitted);
        assert_eq!(state.leave_form, LeaveForm::default());
        let filed = &state.leave_history.as_slice()[0];
        assert_eq!(filed.status, LeaveStatus::Pending);
        assert_eq!(filed.applied_date, d(2026, 3, 18));

        state.set_leave_field(LeaveField::Reason, "again".into());
        assert!(!state.leave_submitted);

        state.submit_leave(d(2026, 3, 18), 6).unwrap_err();
        state.leave_submitted = true;
        state.select_tab(Tab::Tasks);
        assert!(!state.leave_submitted);
    }

    #[test]
    fn select_tab_closes_the_sidebar() {
        let mut state = state();
        state.toggle_sidebar();
        assert!(state.sidebar_open);
        state.select_tab(Tab::Events);
        assert_eq!(state.active_tab, Tab::Events);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn notice_filter_narrows_by_kind() {
        let mut state = state();
        assert_eq!(state.visible_notices().len(), state.notices.len());
        state.notice_filter = Some(NoticeKind::Urgent);
        assert!(state
            .visible_notices()
            .iter()
            .all(|notice| notice.kind == NoticeKind::Urgent));
        assert_eq!(state.visible_notices().len(), 1);
    }

    #[test]
    fn upcoming_events_are_sorted_and_exclude_the_past() {
        let state = state();
        let upcoming = state.upcoming_events(d(2026, 3, 15));
        let ids: Vec<u64> = upcoming.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![3, 4, 6, 5]);
        assert!(state.upcoming_events(d(2027, 1, 1)).is_empty());
        assert_eq!(state.events_on(d(2026, 3, 15)).len(), 2);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{d, fixed_clock, fixture_seed};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_app_falls_back_to_a_seeded_context() {
        with_runtime(|| {
            let ctx = use_app();
            assert!(!ctx.state.get_untracked().tasks.is_empty());
            let again = use_app();
            assert_eq!(ctx.state, again.state);
        });
    }

    #[test]
    fn context_uses_the_injected_clock() {
        with_runtime(|| {
            let ctx = AppContext::new(Rc::new(fixed_clock()), fixture_seed(), d(2026, 3, 15));
            assert_eq!(ctx.today(), d(2026, 3, 18));
            assert_eq!(ctx.state.get_untracked().calendar.month(), d(2026, 3, 1));
        });
    }
}
