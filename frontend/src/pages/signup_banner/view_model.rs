use super::repository::SignupRepository;
use super::utils::{BannerFormState, ExpansionState, FormInput, SubmissionState};
use crate::api::{ApiClient, ApiError, SubscribeResponse};
use crate::utils::browser::PageContext;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SignupBannerViewModel {
    pub expansion: RwSignal<ExpansionState>,
    pub submission: RwSignal<SubmissionState>,
    pub form: BannerFormState,
    pub last_error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<FormInput, Result<SubscribeResponse, ApiError>>,
}

impl SignupBannerViewModel {
    pub fn is_expanded(&self) -> bool {
        self.expansion.get() == ExpansionState::Expanded
    }

    pub fn expand(&self) {
        self.expansion.set(ExpansionState::Expanded);
    }

    /// Close button and "Not interested": collapse, keep everything else.
    pub fn close(&self) {
        self.expansion.set(ExpansionState::Collapsed);
    }

    /// "Got it" on either message view. A failed attempt is cleared so the
    /// form comes back on the next expand; a success stays on record.
    pub fn dismiss_message(&self) {
        if self.submission.get_untracked() == SubmissionState::Failed {
            self.submission.set(SubmissionState::Idle);
            self.last_error.set(None);
        }
        self.expansion.set(ExpansionState::Collapsed);
    }

    pub fn is_pending(&self) -> bool {
        self.submit_action.pending().get()
    }

    pub fn submit_disabled(&self) -> bool {
        !self.form.consent_given.get() || self.is_pending()
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked()
            || self.submission.get_untracked().is_submitted()
            || !self.form.consent_given.get_untracked()
        {
            return;
        }
        self.submit_action.dispatch(self.form.snapshot());
    }

    pub fn settle(&self, result: Result<SubscribeResponse, ApiError>) {
        settle_into(self.submission, self.last_error, result);
    }
}

fn settle_into(
    submission: RwSignal<SubmissionState>,
    last_error: RwSignal<Option<ApiError>>,
    result: Result<SubscribeResponse, ApiError>,
) {
    match result {
        Ok(_) => {
            last_error.set(None);
            submission.set(SubmissionState::Succeeded);
        }
        Err(err) => {
            log::debug!("signup attempt failed with {}", err.code);
            last_error.set(Some(err));
            submission.set(SubmissionState::Failed);
        }
    }
}

pub fn use_signup_banner_view_model() -> SignupBannerViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));
    let submission = create_rw_signal(SubmissionState::default());
    let last_error = create_rw_signal(None);

    let submit_action = create_action(move |input: &FormInput| {
        let repo = repository.clone();
        let input = input.clone();
        let page = PageContext::current();
        async move {
            let result = repo.subscribe(input, page).await;
            settle_into(submission, last_error, result.clone());
            result
        }
    });

    SignupBannerViewModel {
        expansion: create_rw_signal(ExpansionState::default()),
        submission,
        form: BannerFormState::default(),
        last_error,
        submit_action,
    }
}
