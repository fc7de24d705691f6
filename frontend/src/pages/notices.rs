use crate::{
    components::{badges::NoticeBadge, empty_state::EmptyState},
    state::use_app,
    types::NoticeKind,
};
use leptos::*;

fn chip_classes(active: bool) -> &'static str {
    if active {
        "rounded-full px-3 py-1 text-xs font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "rounded-full px-3 py-1 text-xs font-medium border border-border text-fg-muted hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn NoticesPage() -> impl IntoView {
    let state = use_app().state;
    let notices = create_memo(move |_| {
        state.with(|s| s.visible_notices().into_iter().cloned().collect::<Vec<_>>())
    });
    let selected = move || state.with(|s| s.notice_filter);

    let chip = move |kind: Option<NoticeKind>, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || chip_classes(selected() == kind)
                on:click=move |_| state.update(|s| s.notice_filter = kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Notice Board"}</h2>
                <p class="mt-1 text-sm text-fg-muted">{"Announcements from the warden's office."}</p>
            </div>
            <div class="flex flex-wrap gap-2">
                {chip(None, "All")}
                {NoticeKind::ALL
                    .into_iter()
                    .map(|kind| chip(Some(kind), kind.label()))
                    .collect_view()}
            </div>
            <Show
                when=move || !notices.get().is_empty()
                fallback=|| view! { <EmptyState title="No notices" /> }
            >
                <div class="space-y-4">
                    <For
                        each=move || notices.get()
                        key=|notice| notice.id
                        children=move |notice| view! {
                            <article class=format!(
                                "bg-surface-elevated shadow rounded-lg p-5 {}",
                                notice.kind.border_classes()
                            )>
                                <div class="flex items-center justify-between">
                                    <h3 class="text-base font-semibold text-fg">{notice.title}</h3>
                                    <NoticeBadge kind=notice.kind />
                                </div>
                                <p class="mt-2 text-sm text-fg">{notice.content}</p>
                                <p class="mt-3 text-xs text-fg-muted">{notice.date}</p>
                            </article>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
