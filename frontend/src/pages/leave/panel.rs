use crate::pages::leave::{
    components::{LeaveHistoryTable, LeaveRequestForm},
    view_model::use_leave_view_model,
};
use leptos::*;

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();
    let history = vm.history;

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{"Leave"}</h2>
                <p class="mt-1 text-sm text-fg-muted">{"Request time away from the hostel and track your applications."}</p>
            </div>
            <LeaveRequestForm vm=vm />
            <LeaveHistoryTable history=history />
        </div>
    }
}
