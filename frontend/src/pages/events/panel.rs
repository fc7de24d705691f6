use crate::pages::events::{
    components::{CalendarGrid, DayDetail, UpcomingEvents},
    view_model::use_events_view_model,
};
use leptos::*;

#[component]
pub fn EventsPage() -> impl IntoView {
    let vm = use_events_view_model();
    let grid_vm = vm.clone();
    let detail_vm = vm.clone();

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Events"}</h2>
                <p class="mt-1 text-sm text-fg-muted">{"Residence activities by month."}</p>
            </div>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg p-4">
                    <CalendarGrid vm=grid_vm />
                </div>
                <div class="space-y-6">
                    <DayDetail vm=detail_vm />
                    <UpcomingEvents vm=vm />
                </div>
            </div>
        </div>
    }
}
