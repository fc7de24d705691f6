use chrono::NaiveDate;
use leptos::*;

use crate::state::{use_app, HostelState};
use crate::types::{Event, Notice, Task};

/// Rows shown in each dashboard preview list.
pub const PREVIEW_LIMIT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub pending_tasks: usize,
    pub total_tasks: usize,
    pub notices: usize,
    pub urgent_notices: usize,
    pub upcoming_events: usize,
    pub pending_leave: usize,
}

impl DashboardSummary {
    pub fn build(state: &HostelState, today: NaiveDate) -> Self {
        Self {
            pending_tasks: state.tasks.pending_count(),
            total_tasks: state.tasks.len(),
            notices: state.notices.len(),
            urgent_notices: state
                .notices
                .iter()
                .filter(|notice| notice.kind == crate::types::NoticeKind::Urgent)
                .count(),
            upcoming_events: state.upcoming_events(today).len(),
            pending_leave: state.leave_history.pending_count(),
        }
    }
}

pub fn pending_task_preview(state: &HostelState) -> Vec<Task> {
    state
        .tasks
        .as_slice()
        .iter()
        .filter(|task| !task.completed)
        .take(PREVIEW_LIMIT)
        .cloned()
        .collect()
}

pub fn notice_preview(state: &HostelState) -> Vec<Notice> {
    state.notices.iter().take(PREVIEW_LIMIT).cloned().collect()
}

pub fn upcoming_event_preview(state: &HostelState, today: NaiveDate) -> Vec<Event> {
    state
        .upcoming_events(today)
        .into_iter()
        .take(PREVIEW_LIMIT)
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary: Memo<DashboardSummary>,
    pub task_hint: Signal<String>,
    pub notice_hint: Signal<String>,
    pub pending_tasks: Memo<Vec<Task>>,
    pub notices: Memo<Vec<Notice>>,
    pub upcoming_events: Memo<Vec<Event>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let ctx = use_app();
        let state = ctx.state;
        let today = ctx.today();
        let summary = create_memo(move |_| state.with(|s| DashboardSummary::build(s, today)));

        Self {
            summary,
            task_hint: Signal::derive(move || {
                format!("of {} total", summary.with(|s| s.total_tasks))
            }),
            notice_hint: Signal::derive(move || {
                format!("{} urgent", summary.with(|s| s.urgent_notices))
            }),
            pending_tasks: create_memo(move |_| state.with(pending_task_preview)),
            notices: create_memo(move |_| state.with(notice_preview)),
            upcoming_events: create_memo(move |_| {
                state.with(|s| upcoming_event_preview(s, today))
            }),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_fixture_context, ssr::with_runtime};
    use crate::types::NoticeKind;

    #[test]
    fn hints_follow_state_changes() {
        with_runtime(|| {
            let ctx = provide_fixture_context();
            let vm = DashboardViewModel::new();
            assert_eq!(vm.task_hint.get(), "of 3 total");
            assert_eq!(vm.notice_hint.get(), "1 urgent");

            ctx.state.update(|s| {
                s.task_draft = "Buy milk".into();
                s.add_task_from_draft(42).unwrap();
                s.notices[1].kind = NoticeKind::Urgent;
            });
            assert_eq!(vm.task_hint.get(), "of 4 total");
            assert_eq!(vm.notice_hint.get(), "2 urgent");
            assert_eq!(vm.summary.get().pending_tasks, 3);
        });
    }
}
