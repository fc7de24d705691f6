use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(optional, into)] hint: Option<MaybeSignal<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
                {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{move || hint.get()}</p> })}
            </div>
        </div>
    }
}

#[component]
pub fn SectionCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">{title}</h3>
                {description.map(|desc| view! { <p class="text-sm text-fg-muted">{desc}</p> })}
            </div>
            {children()}
        </div>
    }
}
