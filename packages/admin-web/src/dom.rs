//! Browser dialogs and windows
//!
//! Outside the browser these are inert: confirmations are declined and
//! nothing is opened.

/// Blocking `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "web"))]
    {
        tracing::debug!(message, "No browser available, declining confirmation");
        false
    }
}

pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                tracing::warn!(url, "Could not open new tab");
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        tracing::debug!(url, "No browser available, not opening tab");
    }
}
