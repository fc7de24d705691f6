use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::{
    components::layout::Layout,
    pages::{DashboardPage, EventsPage, LeavePage, NoticesPage, TasksPage},
    state::{use_app, Tab},
};

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let state = use_app().state;
    let active = create_memo(move |_| state.with(|s| s.active_tab));

    view! {
        <Title text="HostelHub"/>
        <Layout>
            {move || active_page(active.get())}
        </Layout>
    }
}

fn active_page(tab: Tab) -> View {
    match tab {
        Tab::Dashboard => view! { <DashboardPage/> }.into_view(),
        Tab::Tasks => view! { <TasksPage/> }.into_view(),
        Tab::Notices => view! { <NoticesPage/> }.into_view(),
        Tab::Events => view! { <EventsPage/> }.into_view(),
        Tab::Leave => view! { <LeavePage/> }.into_view(),
    }
}
