use crate::{
    state::{use_app, Tab},
    utils::time::format_long_date,
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let today = format_long_date(ctx.today());
    let sidebar_open = move || state.with(|s| s.sidebar_open);
    let toggle_sidebar = move |_| state.update(|s| s.toggle_sidebar());

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_sidebar
                            aria-expanded=move || sidebar_open().to_string()
                            aria-controls="sidebar-nav"
                        >
                            <span class="sr-only">
                                {move || if sidebar_open() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || menu_icon_path(sidebar_open())
                                />
                            </svg>
                        </button>
                        <h1 class="text-xl font-semibold text-fg">"HostelHub"</h1>
                    </div>
                    <p class="text-sm text-fg-muted">{today}</p>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app().state;
    let open = move || state.with(|s| s.sidebar_open);

    view! {
        <aside id="sidebar-nav" class=move || sidebar_classes(open())>
            <nav class="px-3 py-4 space-y-1">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                data-tab=tab.key()
                                class=move || tab_classes(state.with(|s| s.active_tab == tab))
                                on:click=move |_| state.update(|s| s.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="max-w-7xl mx-auto flex gap-6 py-6 sm:px-6 lg:px-8">
                <Sidebar/>
                <main class="flex-1 min-w-0">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

fn menu_icon_path(open: bool) -> &'static str {
    if open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    }
}

fn sidebar_classes(open: bool) -> &'static str {
    if open {
        "w-56 shrink-0 bg-surface-elevated shadow rounded-lg"
    } else {
        "hidden lg:block w-56 shrink-0 bg-surface-elevated shadow rounded-lg"
    }
}

fn tab_classes(active: bool) -> &'static str {
    if active {
        "w-full text-left px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}
