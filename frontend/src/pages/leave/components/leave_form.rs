use crate::components::{common::SubmitButton, layout::SuccessMessage};
use crate::pages::leave::view_model::LeaveViewModel;
use crate::state::LeaveField;
use leptos::*;

const SUCCESS_TEXT: &str = "Leave application submitted. The warden will review it shortly.";

#[component]
pub fn LeaveRequestForm(vm: LeaveViewModel) -> impl IntoView {
    let submitted = vm.submitted;
    let reason = vm.field_value(LeaveField::Reason);
    let departure = vm.field_value(LeaveField::DepartureDate);
    let return_date = vm.field_value(LeaveField::ReturnDate);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">{"Apply for leave"}</h3>
                <p class="text-sm text-fg-muted">{"All fields are required."}</p>
            </div>
            <Show when=move || submitted.get()>
                <SuccessMessage message=SUCCESS_TEXT />
            </Show>
            <form class="space-y-4" on:submit=vm.handle_submit()>
                <div>
                    <label class="block text-sm font-medium text-fg" for="leave-reason">{"Reason"}</label>
                    <textarea
                        id="leave-reason"
                        name=LeaveField::Reason.name()
                        rows=3
                        required=true
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason.get()
                        on:input=vm.handle_field(LeaveField::Reason)
                    ></textarea>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg" for="leave-departure">{"Departure date"}</label>
                        <input
                            id="leave-departure"
                            type="date"
                            name=LeaveField::DepartureDate.name()
                            required=true
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || departure.get()
                            on:input=vm.handle_field(LeaveField::DepartureDate)
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg" for="leave-return">{"Return date"}</label>
                        <input
                            id="leave-return"
                            type="date"
                            name=LeaveField::ReturnDate.name()
                            required=true
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || return_date.get()
                            on:input=vm.handle_field(LeaveField::ReturnDate)
                        />
                    </div>
                </div>
                <SubmitButton>{"Submit application"}</SubmitButton>
            </form>
        </div>
    }
}
