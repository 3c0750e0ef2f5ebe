use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailFormat {
    #[default]
    Html,
    Text,
}

impl EmailFormat {
    pub const ALL: [EmailFormat; 2] = [EmailFormat::Html, EmailFormat::Text];

    pub fn value(&self) -> &'static str {
        match self {
            EmailFormat::Html => "html",
            EmailFormat::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmailFormat::Html => "HTML",
            EmailFormat::Text => "Text",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.value() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitted(&self) -> bool {
        !matches!(self, SubmissionState::Idle)
    }
}

/// Snapshot of the form fields at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub format: EmailFormat,
    pub consent_given: bool,
}

#[derive(Clone, Copy)]
pub struct BannerFormState {
    pub email: RwSignal<String>,
    pub format: RwSignal<EmailFormat>,
    pub consent_given: RwSignal<bool>,
}

impl Default for BannerFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            format: create_rw_signal(EmailFormat::default()),
            consent_given: create_rw_signal(true),
        }
    }
}

impl BannerFormState {
    pub fn snapshot(&self) -> FormInput {
        FormInput {
            email: self.email.get(),
            format: self.format.get(),
            consent_given: self.consent_given.get(),
        }
    }

    pub fn toggle_consent(&self) {
        self.consent_given.update(|given| *given = !*given);
    }
}

/// Returns the trimmed address when it looks deliverable.
pub fn validate_email(raw: &str) -> Result<String, String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email address is required".into());
    }
    if email.chars().any(char::is_whitespace) {
        return Err("Email address must not contain spaces".into());
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err("Email address must contain @".into()),
    };
    if local.is_empty() || domain.contains('@') {
        return Err("Email address is invalid".into());
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err("Email domain is invalid".into());
    }
    Ok(email.to_string())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_defaults_to_html_with_consent() {
        with_runtime(|| {
            let form = BannerFormState::default();
            let input = form.snapshot();
            assert!(input.email.is_empty());
            assert_eq!(input.format, EmailFormat::Html);
            assert!(input.consent_given);

            form.toggle_consent();
            assert!(!form.consent_given.get());
        });
    }
}
