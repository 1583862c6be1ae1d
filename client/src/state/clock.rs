//! Clock view state and its transitions.
//!
//! DESIGN
//! ======
//! Everything the clock page mutates lives here so transitions stay pure and
//! testable. The periodic timer itself is owned by the page (see
//! `util::ticker`); this state only records whether it should be running.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, Utc};

use crate::util::clock_math::{format_hms, page_title, reading_at};
use crate::util::gmt::{DEFAULT_ZONE, format_gmt_label, parse_gmt_offset};
use crate::util::shortcuts::Shortcut;

/// Placeholder shown until the first draw.
pub const EMPTY_DISPLAY: &str = "--:--:--";

/// User intents handled by the clock page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAction {
    ToggleSelector,
    ConfirmSelection,
    Update,
    Reset,
    ToggleTheme,
    ShowStatistics,
}

impl From<Shortcut> for ClockAction {
    fn from(shortcut: Shortcut) -> Self {
        match shortcut {
            Shortcut::Reset => Self::Reset,
            Shortcut::Update => Self::Update,
            Shortcut::ToggleTheme => Self::ToggleTheme,
        }
    }
}

/// Clock page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    /// Hours added to UTC for display.
    pub offset_hours: i32,
    /// Whether the timezone selector panel is visible.
    pub selector_open: bool,
    /// Current selector value, e.g. `GMT+5`.
    pub selected: String,
    /// Last rendered `HH:MM:SS`; empty before the first draw.
    pub display: String,
    /// Set once the first zone is applied; the refresh timer follows it.
    pub ticking: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            offset_hours: 0,
            selector_open: false,
            selected: DEFAULT_ZONE.to_owned(),
            display: String::new(),
            ticking: false,
        }
    }
}

impl ClockState {
    pub fn toggle_selector(&mut self) {
        self.selector_open = !self.selector_open;
    }

    /// Track a selector change without applying it.
    pub fn select(&mut self, value: impl Into<String>) {
        self.selected = value.into();
    }

    /// Parse `value` into the active offset and request ticking.
    ///
    /// Returns the new offset.
    pub fn apply_zone(&mut self, value: &str) -> i32 {
        self.offset_hours = parse_gmt_offset(value);
        self.ticking = true;
        self.offset_hours
    }

    /// Confirm button: hide the panel and apply the selected zone.
    pub fn confirm_selection(&mut self) -> i32 {
        self.selector_open = false;
        let selected = self.selected.clone();
        self.apply_zone(&selected)
    }

    /// Reset button: back to the default zone with the panel hidden.
    pub fn reset(&mut self) -> i32 {
        self.selected = DEFAULT_ZONE.to_owned();
        self.selector_open = false;
        self.apply_zone(DEFAULT_ZONE)
    }

    /// Recompute the display for `now`.
    pub fn redraw(&mut self, now: DateTime<Utc>) {
        self.display = format_hms(reading_at(now, self.offset_hours));
    }

    pub fn display_text(&self) -> &str {
        if self.display.is_empty() { EMPTY_DISPLAY } else { &self.display }
    }

    /// Active zone label, e.g. `GMT-3`.
    pub fn zone_label(&self) -> String {
        format_gmt_label(self.offset_hours)
    }

    pub fn title(&self) -> String {
        page_title(self.offset_hours)
    }
}
