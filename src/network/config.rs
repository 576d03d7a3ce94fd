use crate::constants::{ASK_PATH, UPLOAD_PATH};

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin: the widget is normally served by the Q&A service itself,
    /// so an empty base turns every route into a relative URL.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Build from the `API_BASE_URL` environment variable captured at compile
    /// time, falling back to same-origin.
    pub fn new() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::from_url(url),
            _ => Self::default(),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// `encoded_query` must already be URI-component encoded.
    pub fn ask_url(&self, encoded_query: &str) -> String {
        format!("{}{}?q={}", self.base_url, ASK_PATH, encoded_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn default_routes_are_relative() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.upload_url(), "/upload/");
        assert_eq!(cfg.ask_url("what%20now"), "/ask/?q=what%20now");
    }

    #[wasm_bindgen_test]
    fn trailing_slash_is_trimmed() {
        let cfg = ApiConfig::from_url("http://localhost:8000/");
        assert_eq!(cfg.base_url(), "http://localhost:8000");
        assert_eq!(cfg.upload_url(), "http://localhost:8000/upload/");
    }
}
