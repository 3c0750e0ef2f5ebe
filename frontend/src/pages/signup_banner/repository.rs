use super::utils::{validate_email, FormInput};
use crate::api::{ApiClient, ApiError, SubscribeRequest, SubscribeResponse};
use crate::config;
use crate::utils::browser::PageContext;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
    newsletter: Option<String>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            client,
            newsletter: None,
        }
    }

    pub fn with_newsletter(mut self, newsletter: impl Into<String>) -> Self {
        self.newsletter = Some(newsletter.into());
        self
    }

    async fn newsletter(&self) -> String {
        match &self.newsletter {
            Some(id) => id.clone(),
            None => config::await_banner_config().await.newsletter,
        }
    }

    /// Validates the form and sends a single subscribe request. Invalid input
    /// never reaches the network.
    pub async fn subscribe(
        &self,
        input: FormInput,
        page: PageContext,
    ) -> Result<SubscribeResponse, ApiError> {
        if !input.consent_given {
            return Err(ApiError::validation("Consent is required to subscribe"));
        }
        let email = validate_email(&input.email).map_err(ApiError::validation)?;
        let request = SubscribeRequest {
            email,
            newsletters: self.newsletter().await,
            lang: page.lang,
            source_url: page.source_url,
        };
        self.client.subscribe(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::signup_banner::utils::EmailFormat;
    use serde_json::json;
    use std::time::Duration;

    fn input(email: &str, consent_given: bool) -> FormInput {
        FormInput {
            email: email.into(),
            format: EmailFormat::Text,
            consent_given,
        }
    }

    fn page() -> PageContext {
        PageContext {
            lang: "pt-BR".into(),
            source_url: "https://hubs.example/".into(),
        }
    }

    fn repository_for(server: &MockServer) -> SignupRepository {
        let client = ApiClient::new_with_subscribe_url(server.url("/news/subscribe/"))
            .with_timeout(Duration::from_secs(5));
        SignupRepository::new_with_client(Rc::new(client)).with_newsletter("hubs")
    }

    fn ok_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/news/subscribe/");
            then.status(200).json_body(json!({ "status": "ok" }));
        });
        server
    }

    #[tokio::test]
    async fn subscribe_sends_trimmed_email_with_page_context() {
        let server = ok_server();
        let repo = repository_for(&server);

        repo.subscribe(input("  bob@example.org ", true), page())
            .await
            .unwrap();

        let received = server.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].form_value("email").as_deref(), Some("bob@example.org"));
        assert_eq!(received[0].form_value("newsletters").as_deref(), Some("hubs"));
        assert_eq!(received[0].form_value("lang").as_deref(), Some("pt-BR"));
        assert_eq!(
            received[0].form_value("source_url").as_deref(),
            Some("https://hubs.example/")
        );
        assert_eq!(received[0].form_value("format"), None);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_network() {
        let server = ok_server();
        let repo = repository_for(&server);

        let err = repo
            .subscribe(input("not-an-email", true), page())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(server.hits(), 0);
    }

    #[tokio::test]
    async fn missing_consent_never_reaches_the_network() {
        let server = ok_server();
        let repo = repository_for(&server);

        let err = repo
            .subscribe(input("bob@example.org", false), page())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(server.hits(), 0);
    }
}
