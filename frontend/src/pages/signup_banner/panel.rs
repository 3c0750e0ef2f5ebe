use super::components::{
    form::SignupForm,
    messages::{ErrorMessage, SuccessMessage},
};
use super::utils::SubmissionState;
use super::view_model::SignupBannerViewModel;
use crate::components::common::{Button, CloseButton};
use crate::config::BannerConfig;
use leptos::*;

const HEADLINE: &str = "Join the next evolution of Hubs!";

#[component]
pub fn SignupBannerPanel(vm: SignupBannerViewModel, config: BannerConfig) -> impl IntoView {
    let BannerConfig {
        privacy_url,
        support_url,
        ..
    } = config;
    let privacy_url = store_value(privacy_url);
    let support_url = store_value(support_url);
    let dismiss = Callback::new(move |_| vm.dismiss_message());
    let close = Callback::new(move |_| vm.close());

    let body = move || match vm.submission.get() {
        SubmissionState::Idle => {
            view! { <SignupForm vm=vm privacy_url=privacy_url.get_value() /> }.into_view()
        }
        SubmissionState::Succeeded => view! { <SuccessMessage on_dismiss=dismiss /> }.into_view(),
        SubmissionState::Failed => {
            view! { <ErrorMessage support_url=support_url.get_value() on_dismiss=dismiss /> }
                .into_view()
        }
    };

    view! {
        <div class="w-full bg-surface-elevated border-b border-border">
            <div class="max-w-7xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 px-4 py-3">
                <div>
                    <h2 class="text-lg font-bold text-fg">{HEADLINE}</h2>
                    <p class="text-sm text-fg-muted">"Be the first to get a sneak peek!"</p>
                </div>
                <Button attr:type="button" on:click=move |_| vm.expand()>
                    "Find out more"
                    <i class="fas fa-chevron-down ml-2" aria-hidden="true"></i>
                </Button>
            </div>

            <Show when=move || vm.is_expanded()>
                <div class="max-w-7xl mx-auto px-4 pb-6">
                    <div class="rounded-lg bg-surface shadow-xl border border-border p-6 space-y-4">
                        <div class="flex items-start justify-between gap-3">
                            <h2 class="text-xl font-bold text-fg">{HEADLINE}</h2>
                            <CloseButton on_click=close />
                        </div>
                        <div class="grid gap-6 md:grid-cols-2">
                            <div class="space-y-2 text-sm text-fg-muted">
                                <p>
                                    "We're working on a new service that makes it easier than ever to deploy a Hub of your own."
                                </p>
                                <p>
                                    "Sign up here to be the first to know about our new service, as well as the latest Hubs news, product features and offerings. We can't wait to show you what we've been working on!"
                                </p>
                            </div>
                            {body}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
