use leptos::*;
use log::{debug, info};

use crate::state::{use_app, AppContext, LeaveField, LeaveForm};
use crate::types::LeaveRequest;

#[derive(Clone)]
pub struct LeaveViewModel {
    pub ctx: AppContext,
    pub form: Memo<LeaveForm>,
    pub submitted: Memo<bool>,
    pub history: Memo<Vec<LeaveRequest>>,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let ctx = use_app();
        let state = ctx.state;
        Self {
            form: create_memo(move |_| state.with(|s| s.leave_form.clone())),
            submitted: create_memo(move |_| state.with(|s| s.leave_submitted)),
            history: create_memo(move |_| state.with(|s| s.leave_history.as_slice().to_vec())),
            ctx,
        }
    }

    pub fn field_value(&self, field: LeaveField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn handle_field(&self, field: LeaveField) -> impl Fn(ev::Event) {
        let state = self.ctx.state;
        move |ev| {
            let value = event_target_value(&ev);
            state.update(|s| s.set_leave_field(field, value));
        }
    }

    pub fn handle_submit(&self) -> impl Fn(ev::SubmitEvent) {
        let ctx = self.ctx.clone();
        move |ev| {
            ev.prevent_default();
            let today = ctx.today();
            let stamp = ctx.stamp();
            ctx.state.update(|s| match s.submit_leave(today, stamp) {
                Ok(()) => info!("leave request filed on {}", today),
                Err(err) => debug!("leave request not filed: {}", err),
            });
        }
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
