use leptos::*;

const FIELD_LABEL_CLASS: &str = "block text-sm font-bold text-fg-muted mb-1";

#[component]
pub fn TextInputField(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class=format!("flex flex-col {}", class)>
            <label for=id.clone() class=FIELD_LABEL_CLASS>{label}</label>
            <input
                id=id
                name=name
                type=input_type
                required=required
                placeholder=placeholder
                class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// One choice of a `RadioInputField`: form value and visible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[component]
pub fn RadioInputField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    options: Vec<RadioOption>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<&'static str>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <fieldset class=format!("flex flex-col {}", class)>
            <legend class=FIELD_LABEL_CLASS>{label}</legend>
            <div class="flex gap-4">
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <label class="inline-flex items-center gap-2 text-sm text-fg">
                                <input
                                    type="radio"
                                    name=name.clone()
                                    value=value
                                    checked=move || selected.get() == value
                                    on:change=move |_| on_select.call(value)
                                />
                                {option.label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
pub fn CheckboxInput(
    #[prop(into)] id: String,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-start gap-2 {}", class)>
            <input
                id=id.clone()
                type="checkbox"
                tabindex="0"
                class="mt-1 h-4 w-4 rounded border-form-control-border"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.call(())
            />
            <label for=id class="text-sm text-fg-muted">{children()}</label>
        </div>
    }
}
