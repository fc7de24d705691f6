use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "border border-border text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

/// Primary-styled submit button for the page forms.
#[component]
pub fn SubmitButton(children: Children) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 {}",
                ButtonVariant::Primary.classes()
            )
        >
            {children()}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn submit_button_submits_its_form() {
        let html = render_to_string(|| view! { <SubmitButton>"Save"</SubmitButton> });
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("bg-action-primary-bg"));
        assert!(html.contains("Save"));
    }
}
