//! Global keyboard shortcuts for the clock page.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Action bound to a keyboard chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+R: back to GMT+0.
    Reset,
    /// Ctrl+U: redraw now.
    Update,
    /// Ctrl+T: flip light/dark.
    ToggleTheme,
}

/// Chords shown in the page footer.
pub const SHORTCUT_HINTS: &[(&str, &str)] = &[("Ctrl + R", "Reset"), ("Ctrl + U", "Update"), ("Ctrl + T", "Theme")];

/// Resolve a keydown into a shortcut.
///
/// Keys match exactly as the browser reports them, so `Ctrl+Shift+R`
/// (`"R"`) falls through to the browser.
pub fn resolve(ctrl: bool, key: &str) -> Option<Shortcut> {
    if !ctrl {
        return None;
    }
    match key {
        "r" => Some(Shortcut::Reset),
        "u" => Some(Shortcut::Update),
        "t" => Some(Shortcut::ToggleTheme),
        _ => None,
    }
}
