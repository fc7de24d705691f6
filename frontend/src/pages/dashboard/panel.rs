use crate::{
    components::{
        badges::{NoticeBadge, PriorityBadge},
        cards::{SectionCard, StatCard},
        empty_state::EmptyState,
    },
    pages::dashboard::view_model::use_dashboard_view_model,
    utils::time::format_short_date,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let summary = vm.summary;

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Dashboard"}</h2>
                <p class="mt-1 text-sm text-fg-muted">{"Your tasks, notices and upcoming events at a glance."}</p>
            </div>

            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard
                    label="Pending tasks"
                    value=Signal::derive(move || summary.get().pending_tasks.to_string())
                    hint=vm.task_hint
                />
                <StatCard
                    label="Notices"
                    value=Signal::derive(move || summary.get().notices.to_string())
                    hint=vm.notice_hint
                />
                <StatCard
                    label="Upcoming events"
                    value=Signal::derive(move || summary.get().upcoming_events.to_string())
                />
                <StatCard
                    label="Pending leave"
                    value=Signal::derive(move || summary.get().pending_leave.to_string())
                />
            </div>

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <SectionCard title="Pending tasks">
                    <Show
                        when=move || !vm.pending_tasks.get().is_empty()
                        fallback=|| view! { <EmptyState title="All caught up" /> }
                    >
                        <ul class="divide-y divide-border">
                            <For
                                each=move || vm.pending_tasks.get()
                                key=|task| task.id
                                children=move |task| view! {
                                    <li class="flex items-center justify-between py-2">
                                        <span class="text-sm text-fg">{task.title}</span>
                                        <PriorityBadge priority=task.priority />
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </SectionCard>

                <SectionCard title="Latest notices">
                    <ul class="space-y-3">
                        <For
                            each=move || vm.notices.get()
                            key=|notice| notice.id
                            children=move |notice| view! {
                                <li class="space-y-1">
                                    <div class="flex items-center gap-2">
                                        <NoticeBadge kind=notice.kind />
                                        <span class="text-sm font-medium text-fg">{notice.title}</span>
                                    </div>
                                    <p class="text-xs text-fg-muted">{notice.date}</p>
                                </li>
                            }
                        />
                    </ul>
                </SectionCard>

                <SectionCard title="Upcoming events">
                    <Show
                        when=move || !vm.upcoming_events.get().is_empty()
                        fallback=|| view! { <EmptyState title="Nothing scheduled" /> }
                    >
                        <ul class="divide-y divide-border">
                            <For
                                each=move || vm.upcoming_events.get()
                                key=|event| event.id
                                children=move |event| view! {
                                    <li class="py-2">
                                        <p class="text-sm font-medium text-fg">{event.title}</p>
                                        <p class="text-xs text-fg-muted">
                                            {format!("{} · {}", format_short_date(event.date), event.location)}
                                        </p>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </SectionCard>
            </div>
        </div>
    }
}
