use crate::components::common::{Button, ButtonVariant};
use crate::components::forms::{CheckboxInput, RadioInputField, RadioOption, TextInputField};
use crate::pages::signup_banner::utils::EmailFormat;
use crate::pages::signup_banner::view_model::SignupBannerViewModel;
use leptos::*;

fn format_options() -> Vec<RadioOption> {
    EmailFormat::ALL
        .into_iter()
        .map(|format| RadioOption {
            value: format.value(),
            label: format.label(),
        })
        .collect()
}

#[component]
pub fn SignupForm(vm: SignupBannerViewModel, #[prop(into)] privacy_url: String) -> impl IntoView {
    let form = vm.form;
    let selected_format = Signal::derive(move || form.format.get().value().to_string());
    let on_select_format = Callback::new(move |value: &'static str| {
        if let Some(format) = EmailFormat::from_value(value) {
            form.format.set(format);
        }
    });

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <TextInputField
                id="signup-banner-email"
                name="email"
                label="Email Address"
                value=form.email
                input_type="email"
                placeholder="example@example.com"
                required=true
            />

            <RadioInputField
                name="email_format"
                label="Format"
                options=format_options()
                selected=selected_format
                on_select=on_select_format
            />

            <CheckboxInput
                id="signup-banner-consent"
                checked=Signal::derive(move || form.consent_given.get())
                on_toggle=Callback::new(move |_| form.toggle_consent())
            >
                "I'm okay with Mozilla handling my info as explained in this "
                <a href=privacy_url target="_blank" rel="noopener noreferrer" class="text-link hover:text-link-hover">
                    "Privacy Notice"
                </a>
            </CheckboxInput>

            <div class="flex flex-wrap gap-2">
                <Button
                    attr:type="submit"
                    disabled=Signal::derive(move || vm.submit_disabled())
                    loading=Signal::derive(move || vm.is_pending())
                >
                    "Join the Mailing List"
                </Button>
                <Button
                    attr:type="button"
                    variant=ButtonVariant::Secondary
                    on:click=move |_| vm.close()
                >
                    "Not Interested"
                </Button>
            </div>
        </form>
    }
}
