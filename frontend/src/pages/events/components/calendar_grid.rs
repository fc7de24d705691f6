use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::calendar::{CalendarDay, WEEKDAY_LABELS};
use crate::pages::events::view_model::EventsViewModel;
use crate::types::Event;

pub fn day_cell_classes(in_current_month: bool, is_today: bool, is_selected: bool) -> String {
    let mut classes = vec!["min-h-[5.5rem] p-1.5 text-left align-top flex flex-col gap-1"];
    classes.push(if in_current_month {
        "bg-surface-elevated text-fg"
    } else {
        "bg-surface-muted text-fg-muted"
    });
    if is_today {
        classes.push("ring-2 ring-inset ring-action-primary-bg");
    }
    if is_selected {
        classes.push("bg-action-ghost-bg-hover font-semibold");
    }
    classes.join(" ")
}

#[component]
pub fn CalendarGrid(vm: EventsViewModel) -> impl IntoView {
    let grid = vm.grid;
    let selected = vm.selected;
    let cells_vm = vm.clone();

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-fg">{move || grid.with(|g| g.month_label())}</h3>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-border text-sm"
                        aria-label="Previous month"
                        on:click=vm.handle_previous_month()
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-border text-sm"
                        on:click=vm.handle_today()
                    >
                        "Today"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-border text-sm"
                        aria-label="Next month"
                        on:click=vm.handle_next_month()
                    >
                        "›"
                    </button>
                </div>
            </div>
            <div class="grid grid-cols-7 gap-px bg-border rounded-lg overflow-hidden">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! {
                        <div class="bg-surface-muted px-2 py-1 text-xs font-semibold text-fg-muted text-center">
                            {*label}
                        </div>
                    })
                    .collect_view()}
                {move || {
                    let selected = selected.get();
                    grid.get()
                        .days
                        .into_iter()
                        .map(|day| {
                            let is_selected = day.date == selected;
                            let on_select = cells_vm.handle_select(day.date);
                            view! { <DayCell day=day is_selected=is_selected on_select=on_select /> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn DayCell<F>(day: CalendarDay<Event>, is_selected: bool, on_select: F) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let date: NaiveDate = day.date;
    let overflow = day.overflow_count();
    let titles: Vec<String> = day
        .visible_events()
        .iter()
        .map(|event| event.title.clone())
        .collect();

    view! {
        <button
            type="button"
            class=day_cell_classes(day.in_current_month, day.is_today, is_selected)
            data-date=date.to_string()
            on:click=on_select
        >
            <span class="text-xs">{date.day()}</span>
            {titles
                .into_iter()
                .map(|title| view! {
                    <span class="truncate rounded bg-sky-100 px-1 text-[11px] text-sky-800">{title}</span>
                })
                .collect_view()}
            {(overflow > 0).then(|| view! {
                <span class="text-[11px] text-fg-muted">{format!("+{} more", overflow)}</span>
            })}
        </button>
    }
}
