use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_SUBSCRIBE_URL: &str = "https://basket.mozilla.org/news/subscribe/";
pub const DEFAULT_NEWSLETTER: &str = "hubs";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PRIVACY_URL: &str = "https://github.com/mozilla/hubs/blob/master/PRIVACY.md";
pub const DEFAULT_SUPPORT_URL: &str = "https://discord.com/invite/dFJncWwHun";

#[cfg(target_arch = "wasm32")]
const WINDOW_CONFIG_KEY: &str = "__SIGNUP_BANNER_CONFIG";

/// Partial configuration as delivered by `window.__SIGNUP_BANNER_CONFIG` or
/// `./config.json`. Missing keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub subscribe_url: Option<String>,
    pub newsletter: Option<String>,
    pub timeout_ms: Option<u64>,
    pub privacy_url: Option<String>,
    pub support_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    pub subscribe_url: String,
    pub newsletter: String,
    pub timeout: Duration,
    pub privacy_url: String,
    pub support_url: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            subscribe_url: DEFAULT_SUBSCRIBE_URL.to_string(),
            newsletter: DEFAULT_NEWSLETTER.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            privacy_url: DEFAULT_PRIVACY_URL.to_string(),
            support_url: DEFAULT_SUPPORT_URL.to_string(),
        }
    }
}

impl BannerConfig {
    pub fn merged(runtime: RuntimeConfig) -> Self {
        let defaults = Self::default();
        Self {
            subscribe_url: non_blank(runtime.subscribe_url).unwrap_or(defaults.subscribe_url),
            newsletter: non_blank(runtime.newsletter).unwrap_or(defaults.newsletter),
            timeout: runtime
                .timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            privacy_url: non_blank(runtime.privacy_url).unwrap_or(defaults.privacy_url),
            support_url: non_blank(runtime.support_url).unwrap_or(defaults.support_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

static BANNER_CONFIG: OnceLock<BannerConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Optional global object: window.__SIGNUP_BANNER_CONFIG = { subscribe_url: "...", ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &WINDOW_CONFIG_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let string_key = |key: &str| {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    };
    let timeout_ms = js_sys::Reflect::get(&obj, &"timeout_ms".into())
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms as u64);
    Some(RuntimeConfig {
        subscribe_url: string_key("subscribe_url"),
        newsletter: string_key("newsletter"),
        timeout_ms,
        privacy_url: string_key("privacy_url"),
        support_url: string_key("support_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get(config_json_url())
        .await
        .context("fetching config.json")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    // reqwest needs an absolute URL; resolve against the current page.
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "./config.json".to_string()
}

fn cache(config: BannerConfig) -> BannerConfig {
    let _ = BANNER_CONFIG.set(config.clone());
    BANNER_CONFIG.get().cloned().unwrap_or(config)
}

/// Returns the cached configuration, resolving it on first use.
pub async fn await_banner_config() -> BannerConfig {
    if let Some(cached) = BANNER_CONFIG.get() {
        return cached.clone();
    }
    if let Some(runtime) = snapshot_from_globals() {
        return cache(BannerConfig::merged(runtime));
    }
    match fetch_runtime_config().await {
        Ok(runtime) => cache(BannerConfig::merged(runtime)),
        Err(err) => {
            log::info!("using default banner config: {:#}", err);
            cache(BannerConfig::default())
        }
    }
}

/// Configuration if already resolved, defaults otherwise. Used by views that
/// render before `init` completes.
pub fn banner_config() -> BannerConfig {
    BANNER_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() {
    let config = await_banner_config().await;
    log::info!("banner config resolved: endpoint {}", config.subscribe_url);
}
