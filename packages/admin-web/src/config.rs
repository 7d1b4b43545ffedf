//! Backend location and list defaults

use std::sync::OnceLock;

/// Used when neither the build environment nor `init_api_url` provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Rows per page on the registrados listing.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

static API_URL: OnceLock<String> = OnceLock::new();

/// Override the API URL. Call this at startup, before the first request.
pub fn init_api_url(url: impl Into<String>) {
    let url = url.into();
    if API_URL.set(normalize(&url)).is_err() {
        tracing::warn!(%url, "API URL already initialized, ignoring override");
    }
}

/// Base URL of the REST backend, without a trailing slash.
pub fn api_url() -> &'static str {
    API_URL.get_or_init(|| normalize(option_env!("API_URL").unwrap_or(DEFAULT_API_URL)))
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize("http://api.local:3001//"), "http://api.local:3001");
        assert_eq!(normalize("  https://api.example.cl "), "https://api.example.cl");
    }
}
