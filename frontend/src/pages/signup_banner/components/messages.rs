use crate::components::common::Button;
use leptos::*;

#[component]
fn MessageLayout(
    #[prop(into)] title: String,
    on_dismiss: Callback<()>,
    #[prop(optional, into)] icon_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 p-4 rounded-xl bg-surface-muted border border-border" role="status">
            <div class=format!("flex-shrink-0 text-2xl {}", icon_class) aria-hidden="true"></div>
            <div class="space-y-2">
                <h3 class="text-lg font-bold text-fg">{title}</h3>
                <p class="text-sm text-fg-muted">{children()}</p>
                <Button attr:type="button" on:click=move |_| on_dismiss.call(())>
                    "Got it"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <MessageLayout
            title="You're on the list"
            icon_class="fas fa-ice-cream text-status-success-text"
            on_dismiss=on_dismiss
        >
            "Keep an eye out for product updates and an invite to join us as a tester in August."
        </MessageLayout>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] support_url: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <MessageLayout
            title="We ran into a problem"
            icon_class="fas fa-exclamation-triangle text-status-error-text"
            on_dismiss=on_dismiss
        >
            "Sorry, we were unable to add you to the mailing list, please try again later. If the problem persists please reach out on our "
            <a href=support_url target="_blank" rel="noopener noreferrer" class="text-link hover:text-link-hover">
                "Discord"
            </a>
            "."
        </MessageLayout>
    }
}
