//! Blocking browser notices.

/// Text shown by the statistics button until that view exists.
pub const STATISTICS_PLACEHOLDER: &str = "Statistics feature coming soon!";

/// Show `message` in a browser alert. No-op outside the browser.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("window unavailable, notice dropped: {message}");
            return;
        };
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("notice outside browser: {message}");
    }
}
