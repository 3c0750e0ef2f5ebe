use reqwest::{Client, Request};
use std::future::Future;
use std::time::Duration;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    subscribe_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            subscribe_url: None,
            timeout: None,
        }
    }

    pub fn new_with_subscribe_url(subscribe_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            subscribe_url: Some(subscribe_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn resolved_endpoint(&self) -> (String, Duration) {
        match (&self.subscribe_url, self.timeout) {
            (Some(url), Some(timeout)) => (url.clone(), timeout),
            (url, timeout) => {
                let cfg = config::await_banner_config().await;
                (
                    url.clone().unwrap_or(cfg.subscribe_url),
                    timeout.unwrap_or(cfg.timeout),
                )
            }
        }
    }

    /// Posts one url-encoded subscribe request. Every outcome other than a
    /// 2xx answer whose body carries `"status": "ok"` is an error.
    pub async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResponse, ApiError> {
        let (url, timeout) = self.resolved_endpoint().await;
        let built = self
            .http_client()
            .post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .form(request)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;

        log::debug!("subscribing to {} via {}", request.newsletters, url);
        let outcome = match with_timeout(self.dispatch(built), timeout).await {
            Some(exchange) => exchange.and_then(|(status, body)| classify_response(status, &body)),
            None => Err(ApiError::timeout(format!(
                "No response within {} ms",
                timeout.as_millis()
            ))),
        };
        if let Err(err) = &outcome {
            log::warn!("subscribe failed [{}]: {}", err.code, err);
        }
        outcome
    }

    async fn dispatch(&self, request: Request) -> Result<(u16, String), ApiError> {
        #[cfg(test)]
        if let Some(responder) = mock_for(request.url().as_str()) {
            return responder.respond(&request)?.exchange().await;
        }

        let response = self
            .http_client()
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }
}

/// Maps a finished exchange onto the subscribe outcome.
pub fn classify_response(status: u16, body: &str) -> Result<SubscribeResponse, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::rejected(
            format!("Subscribe endpoint returned status {}", status),
            serde_json::from_str(body).ok(),
        ));
    }
    let parsed: SubscribeResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
    if !parsed.is_ok() {
        let msg = parsed
            .desc
            .clone()
            .unwrap_or_else(|| format!("Subscribe endpoint answered \"{}\"", parsed.status));
        return Err(ApiError::rejected(msg, serde_json::to_value(&parsed).ok()));
    }
    Ok(parsed)
}

/// Resolves to `None` when `duration` elapses before `fut` completes.
#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(fut: F, duration: Duration) -> Option<F::Output> {
    use futures::future::{select, Either};

    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    let timer = gloo_timers::future::TimeoutFuture::new(millis);
    futures::pin_mut!(fut, timer);
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: Future>(fut: F, duration: Duration) -> Option<F::Output> {
    tokio::time::timeout(duration, fut).await.ok()
}

#[cfg(test)]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
#[cfg(test)]
use mock_registry::mock_for;
