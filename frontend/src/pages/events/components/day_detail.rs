use leptos::*;

use crate::components::{cards::SectionCard, empty_state::EmptyState};
use crate::pages::events::view_model::EventsViewModel;
use crate::types::Event;
use crate::utils::time::{format_long_date, format_short_date};

#[component]
fn EventRow(event: Event) -> impl IntoView {
    view! {
        <li class="py-2">
            <p class="text-sm font-medium text-fg">{event.title}</p>
            <p class="text-xs text-fg-muted">
                {format!("{} · {}", format_short_date(event.date), event.location)}
            </p>
        </li>
    }
}

#[component]
pub fn DayDetail(vm: EventsViewModel) -> impl IntoView {
    let selected = vm.selected;
    let events = vm.selected_events;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <h3 class="text-base font-semibold text-fg">{move || format_long_date(selected.get())}</h3>
            <Show
                when=move || !events.get().is_empty()
                fallback=|| view! { <p class="text-sm text-fg-muted">"No events on this day."</p> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || events.get()
                        key=|event| event.id
                        children=|event| view! { <EventRow event=event /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn UpcomingEvents(vm: EventsViewModel) -> impl IntoView {
    let upcoming = vm.upcoming;

    view! {
        <SectionCard title="Upcoming">
            <Show
                when=move || !upcoming.get().is_empty()
                fallback=|| view! { <EmptyState title="Nothing scheduled" /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || upcoming.get()
                        key=|event| event.id
                        children=|event| view! { <EventRow event=event /> }
                    />
                </ul>
            </Show>
        </SectionCard>
    }
}
