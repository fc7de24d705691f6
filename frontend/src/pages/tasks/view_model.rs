use leptos::*;
use log::debug;

use crate::state::{use_app, AppContext, TaskFilter};
use crate::types::Task;

#[derive(Clone)]
pub struct TasksViewModel {
    pub ctx: AppContext,
    pub visible_tasks: Memo<Vec<Task>>,
    pub filter: Signal<TaskFilter>,
    pub draft: Signal<String>,
    pub counts: Memo<(usize, usize)>,
}

impl TasksViewModel {
    pub fn new() -> Self {
        let ctx = use_app();
        let state = ctx.state;
        let visible_tasks = create_memo(move |_| {
            state.with(|s| {
                s.tasks
                    .filtered(s.task_filter)
                    .into_iter()
                    .cloned()
                    .collect()
            })
        });
        let counts = create_memo(move |_| {
            state.with(|s| (s.tasks.pending_count(), s.tasks.completed_count()))
        });

        Self {
            visible_tasks,
            filter: Signal::derive(move || state.with(|s| s.task_filter)),
            draft: Signal::derive(move || state.with(|s| s.task_draft.clone())),
            counts,
            ctx,
        }
    }

    pub fn handle_submit(&self) -> impl Fn(ev::SubmitEvent) {
        let ctx = self.ctx.clone();
        move |ev| {
            ev.prevent_default();
            let stamp = ctx.stamp();
            ctx.state.update(|s| {
                if let Err(err) = s.add_task_from_draft(stamp) {
                    debug!("task not added: {}", err);
                }
            });
        }
    }

    pub fn handle_draft_input(&self) -> impl Fn(ev::Event) {
        let state = self.ctx.state;
        move |ev| {
            let value = event_target_value(&ev);
            state.update(|s| s.task_draft = value);
        }
    }

    pub fn handle_toggle(&self, id: u64) -> impl Fn(ev::Event) {
        let state = self.ctx.state;
        move |_| {
            state.update(|s| {
                if !s.toggle_task(id) {
                    debug!("no task with id {}", id);
                }
            });
        }
    }

    pub fn handle_filter(&self, filter: TaskFilter) -> impl Fn(ev::MouseEvent) {
        let state = self.ctx.state;
        move |_| state.update(|s| s.task_filter = filter)
    }
}

pub fn use_tasks_view_model() -> TasksViewModel {
    match use_context::<TasksViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = TasksViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_fixture_context, ssr::with_runtime};

    #[test]
    fn visible_tasks_follow_the_filter() {
        with_runtime(|| {
            let ctx = provide_fixture_context();
            let vm = TasksViewModel::new();
            assert_eq!(vm.visible_tasks.get().len(), 3);
            assert_eq!(vm.counts.get(), (2, 1));

            ctx.state.update(|s| s.task_filter = TaskFilter::Completed);
            let titles: Vec<String> = vm
                .visible_tasks
                .get()
                .into_iter()
                .map(|task| task.title)
                .collect();
            assert_eq!(titles, vec!["Clean room".to_string()]);
            assert_eq!(vm.filter.get(), TaskFilter::Completed);
        });
    }

    #[test]
    fn memo_tracks_additions_and_toggles() {
        with_runtime(|| {
            let ctx = provide_fixture_context();
            let vm = TasksViewModel::new();

            ctx.state.update(|s| {
                s.task_draft = "Buy milk".into();
                s.add_task_from_draft(ctx.stamp()).unwrap();
            });
            assert_eq!(vm.visible_tasks.get()[0].title, "Buy milk");
            assert!(vm.draft.get().is_empty());

            let id = vm.visible_tasks.get()[0].id;
            ctx.state.update(|s| {
                s.toggle_task(id);
            });
            assert!(vm.visible_tasks.get()[0].completed);
            assert_eq!(vm.counts.get(), (2, 2));
        });
    }
}
