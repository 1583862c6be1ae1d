//! Light/dark theme value.
//!
//! DESIGN
//! ======
//! One value drives every theme surface: the `<html data-theme>` attribute,
//! the `<body>` `light-theme` class, the stored preference, and the toggle
//! button label. `toggled` is the only transition.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown values yield `None`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle button label; names the theme a click switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}
