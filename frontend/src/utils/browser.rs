pub const DEFAULT_LANG: &str = "en";

/// Where the signup happened, as reported to the mailing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub lang: String,
    pub source_url: String,
}

impl PageContext {
    pub fn current() -> Self {
        Self {
            lang: pick_language(preferred_languages(), navigator_language()),
            source_url: current_href().unwrap_or_default(),
        }
    }
}

/// First non-blank entry of `languages`, then `fallback`, then `DEFAULT_LANG`.
pub fn pick_language(languages: Vec<String>, fallback: Option<String>) -> String {
    languages
        .into_iter()
        .chain(fallback)
        .map(|lang| lang.trim().to_string())
        .find(|lang| !lang.is_empty())
        .unwrap_or_else(|| DEFAULT_LANG.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
fn preferred_languages() -> Vec<String> {
    window()
        .map(|w| {
            w.navigator()
                .languages()
                .iter()
                .filter_map(|v| v.as_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn navigator_language() -> Option<String> {
    window().ok()?.navigator().language()
}

#[cfg(target_arch = "wasm32")]
fn current_href() -> Option<String> {
    window().ok()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn preferred_languages() -> Vec<String> {
    Vec::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn navigator_language() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn current_href() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_language_prefers_first_listed() {
        let lang = pick_language(
            vec!["de-DE".into(), "en-US".into()],
            Some("fr".into()),
        );
        assert_eq!(lang, "de-DE");
    }

    #[test]
    fn pick_language_skips_blank_entries_and_falls_back() {
        assert_eq!(pick_language(vec!["  ".into()], Some("fr".into())), "fr");
        assert_eq!(pick_language(Vec::new(), None), DEFAULT_LANG);
    }
}
