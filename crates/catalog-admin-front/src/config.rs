/// Path prefix of every catalog API endpoint.
pub const API_BASE: &str = "/api";

pub const CURRENCY_PREFIX: &str = "R$";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/40";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(origin: &str) -> Self {
        Self {
            base_url: format!("{}{}", origin.trim_end_matches('/'), API_BASE),
        }
    }

    /// Resolves the API against the origin the page was served from.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(&origin)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_origin() {
        assert_eq!(
            ApiConfig::new("http://localhost:5000").base_url,
            "http://localhost:5000/api"
        );
        assert_eq!(
            ApiConfig::new("https://loja.example.com/").base_url,
            "https://loja.example.com/api"
        );
    }

    #[test]
    fn test_default_is_relative() {
        assert_eq!(ApiConfig::default().base_url, "/api");
    }
}
