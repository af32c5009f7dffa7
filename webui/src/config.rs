use std::time::Duration;

use log::warn;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub api_url: Url,
    pub resize_debounce: Duration,
    pub scroll_throttle: Duration,
}

impl SiteConfig {
    pub fn from_environment() -> Self {
        let page = web_sys::window().and_then(|w| w.location().href().ok());
        Self::for_api(resolve_api_url(
            option_env!("ADMISSIONS_API_URL"),
            cfg!(feature = "local"),
            page.as_deref(),
        ))
    }

    fn for_api(api_url: Url) -> Self {
        Self {
            api_url,
            resize_debounce: timing::DEFAULT_WAIT,
            scroll_throttle: Duration::from_millis(100),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default API URL to be valid")
}

/// Picks the backend location: build-time override, then the local backend,
/// then `/api/` on the page's own origin.
pub fn resolve_api_url(override_url: Option<&str>, local: bool, page: Option<&str>) -> Url {
    if let Some(url) = override_url {
        match Url::parse(url) {
            Ok(url) => return url,
            Err(e) => warn!("Ignoring invalid ADMISSIONS_API_URL {:?}: {}", url, e),
        }
    }

    if local {
        return default_api_url();
    }

    page.and_then(|href| Url::parse(href).ok())
        .and_then(|page| page.join("/api/").ok())
        .unwrap_or_else(default_api_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let url = resolve_api_url(
            Some("https://api.college.example/v1/"),
            true,
            Some("https://college.example/"),
        );
        assert_eq!(url.as_str(), "https://api.college.example/v1/");
    }

    #[test]
    fn invalid_override_is_ignored() {
        let url = resolve_api_url(Some("not a url"), true, None);
        assert_eq!(url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn local_feature_uses_local_backend() {
        let url = resolve_api_url(None, true, Some("https://college.example/"));
        assert_eq!(url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn page_origin_api_path() {
        let url = resolve_api_url(
            None,
            false,
            Some("https://college.example/courses/index.html#admission"),
        );
        assert_eq!(url.as_str(), "https://college.example/api/");
    }

    #[test]
    fn no_page_falls_back_to_local_backend() {
        assert_eq!(resolve_api_url(None, false, None).as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn window_event_timings() {
        let config = SiteConfig::for_api(default_api_url());
        assert_eq!(config.resize_debounce, timing::DEFAULT_WAIT);
        assert_eq!(config.resize_debounce, Duration::from_millis(250));
        assert_eq!(config.scroll_throttle, Duration::from_millis(100));
    }
}
