use chrono::NaiveDate;
use leptos::*;

use crate::calendar::MonthGrid;
use crate::state::{use_app, AppContext};
use crate::types::Event;

#[derive(Clone)]
pub struct EventsViewModel {
    pub ctx: AppContext,
    pub grid: Memo<MonthGrid<Event>>,
    pub selected: Memo<NaiveDate>,
    pub selected_events: Memo<Vec<Event>>,
    pub upcoming: Memo<Vec<Event>>,
}

impl EventsViewModel {
    pub fn new() -> Self {
        let ctx = use_app();
        let state = ctx.state;
        let clock = ctx.clock.clone();
        let grid = create_memo(move |_| {
            let today = clock.today();
            state.with(|s| s.calendar.grid(&s.events, today))
        });
        let selected = create_memo(move |_| state.with(|s| s.calendar.selected()));
        let selected_events = create_memo(move |_| {
            let date = selected.get();
            state.with(|s| s.events_on(date).into_iter().cloned().collect())
        });
        let clock = ctx.clock.clone();
        let upcoming = create_memo(move |_| {
            let today = clock.today();
            state.with(|s| s.upcoming_events(today).into_iter().cloned().collect())
        });

        Self {
            ctx,
            grid,
            selected,
            selected_events,
            upcoming,
        }
    }

    pub fn handle_previous_month(&self) -> impl Fn(ev::MouseEvent) {
        let state = self.ctx.state;
        move |_| state.update(|s| s.calendar.previous_month())
    }

    pub fn handle_next_month(&self) -> impl Fn(ev::MouseEvent) {
        let state = self.ctx.state;
        move |_| state.update(|s| s.calendar.next_month())
    }

    pub fn handle_today(&self) -> impl Fn(ev::MouseEvent) {
        let ctx = self.ctx.clone();
        move |_| {
            let today = ctx.today();
            ctx.state.update(|s| s.calendar.jump_to_today(today));
        }
    }

    pub fn handle_select(&self, date: NaiveDate) -> impl Fn(ev::MouseEvent) {
        let state = self.ctx.state;
        move |_| state.update(|s| s.calendar.select(date))
    }
}

pub fn use_events_view_model() -> EventsViewModel {
    match use_context::<EventsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EventsViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
