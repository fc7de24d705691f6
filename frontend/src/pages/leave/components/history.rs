use crate::components::{badges::LeaveStatusBadge, empty_state::EmptyState};
use crate::types::LeaveRequest;
use crate::utils::time::format_short_date;
use leptos::*;

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";

#[component]
pub fn LeaveHistoryTable(history: Memo<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <div class="px-6 py-4 border-b border-border">
                <h3 class="text-lg font-medium text-fg">{"Leave history"}</h3>
            </div>
            <Show
                when=move || !history.get().is_empty()
                fallback=|| view! { <EmptyState title="No leave applications yet" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=HEADER_CLASS>{"Reason"}</th>
                                <th class=HEADER_CLASS>{"Departure"}</th>
                                <th class=HEADER_CLASS>{"Return"}</th>
                                <th class=HEADER_CLASS>{"Applied"}</th>
                                <th class=HEADER_CLASS>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || history.get()
                                key=|request| request.id
                                children=move |request| view! {
                                    <tr data-leave-id=request.id.to_string()>
                                        <td class="px-6 py-4 text-sm text-fg">{request.reason}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{request.departure_date}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{request.return_date}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                                            {format_short_date(request.applied_date)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <LeaveStatusBadge status=request.status />
                                        </td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
