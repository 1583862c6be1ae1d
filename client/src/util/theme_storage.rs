//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies it to the
//! page: a `data-theme` attribute on `<html>` and the `light-theme` class on
//! `<body>`. Toggle writes back to `localStorage`. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const LIGHT_BODY_CLASS: &str = "light-theme";

/// Read the theme preference from localStorage.
///
/// A stored `"light"`/`"dark"` wins; otherwise the system color scheme
/// decides. Without a browser the default light theme is returned.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("window unavailable, using default theme");
            return Theme::default();
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::from_stored(&val) {
                    return theme;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply `theme` to `<html data-theme>` and the `<body>` class list.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("document unavailable, theme not applied");
            return;
        };
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
        match doc.body() {
            Some(body) => {
                let _ = body
                    .class_list()
                    .toggle_with_force(LIGHT_BODY_CLASS, !theme.is_dark());
            }
            None => log::warn!("body element not found"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable, theme not saved");
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    log::info!("theme switched to {}", next.as_str());
    next
}
