use crate::{
    components::{
        badges::PriorityBadge,
        cards::SectionCard,
        common::{ButtonVariant, SubmitButton},
        empty_state::EmptyState,
    },
    pages::tasks::view_model::{use_tasks_view_model, TasksViewModel},
    state::TaskFilter,
    types::Task,
};
use leptos::*;

#[component]
pub fn TasksPage() -> impl IntoView {
    let vm = use_tasks_view_model();
    let counts = vm.counts;
    let form_vm = vm.clone();
    let filter_vm = vm.clone();

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Tasks"}</h2>
                <p class="mt-1 text-sm text-fg-muted">
                    {move || {
                        let (pending, completed) = counts.get();
                        format!("{} pending, {} completed", pending, completed)
                    }}
                </p>
            </div>
            <AddTaskForm vm=form_vm />
            <SectionCard title="Checklist">
                <TaskFilterBar vm=filter_vm />
                <TaskList vm=vm />
            </SectionCard>
        </div>
    }
}

#[component]
fn AddTaskForm(vm: TasksViewModel) -> impl IntoView {
    let draft = vm.draft;
    view! {
        <form class="flex gap-3" on:submit=vm.handle_submit()>
            <input
                type="text"
                placeholder="Add a new task..."
                class="flex-1 border rounded px-3 py-2"
                prop:value=move || draft.get()
                on:input=vm.handle_draft_input()
            />
            <SubmitButton>{"Add"}</SubmitButton>
        </form>
    }
}

#[component]
fn TaskFilterBar(vm: TasksViewModel) -> impl IntoView {
    let current = vm.filter;
    view! {
        <div class="flex gap-2">
            {TaskFilter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            type="button"
                            class=move || filter_classes(current.get() == filter)
                            on:click=vm.handle_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

pub(crate) fn filter_classes(active: bool) -> String {
    let variant = if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };
    format!("rounded-md px-3 py-1 text-sm font-medium {}", variant.classes())
}

#[component]
fn TaskList(vm: TasksViewModel) -> impl IntoView {
    let visible = vm.visible_tasks;
    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=|| view! { <EmptyState title="No tasks here" description="Add one above or change the filter." /> }
        >
            <ul class="divide-y divide-border">
                <For
                    each=move || visible.get()
                    key=|task| (task.id, task.completed)
                    children={
                        let vm = vm.clone();
                        move |task| view! { <TaskRow task=task vm=vm.clone() /> }
                    }
                />
            </ul>
        </Show>
    }
}

#[component]
fn TaskRow(task: Task, vm: TasksViewModel) -> impl IntoView {
    let title_class = if task.completed {
        "text-sm text-fg-muted line-through"
    } else {
        "text-sm text-fg"
    };
    view! {
        <li class="flex items-center justify-between py-3" data-task-id=task.id.to_string()>
            <label class="flex items-center gap-3">
                <input
                    type="checkbox"
                    prop:checked=task.completed
                    on:change=vm.handle_toggle(task.id)
                />
                <span class=title_class>{task.title.clone()}</span>
            </label>
            <PriorityBadge priority=task.priority />
        </li>
    }
}
