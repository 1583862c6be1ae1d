//! GMT offset parsing and labeling.
//!
//! Selector values look like `GMT+5` or `GMT-3`. Parsing is lenient: anything
//! that does not carry a `GMT<sign><digits>` run resolves to offset zero so a
//! bad value never blanks the clock.

#[cfg(test)]
#[path = "gmt_test.rs"]
mod gmt_test;

use once_cell::sync::Lazy;
use regex::Regex;

/// Selector value applied on page load and by reset.
pub const DEFAULT_ZONE: &str = "GMT+0";

/// Westernmost offset listed in the selector.
pub const MIN_LISTED_OFFSET: i32 = -12;

/// Easternmost offset listed in the selector.
pub const MAX_LISTED_OFFSET: i32 = 14;

static GMT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GMT\s*([+-]?)([0-9]+)").expect("GMT pattern is a valid regex"));

/// Parse a selector value into a signed hour offset.
///
/// Input is trimmed and upper-cased first, so `" gmt-3 "` parses as `-3`.
/// Returns `0` when no `GMT` run is present or the digits overflow.
pub fn parse_gmt_offset(raw: &str) -> i32 {
    let normalized = raw.trim().to_uppercase();
    let Some(caps) = GMT_PATTERN.captures(&normalized) else {
        return 0;
    };
    let hours = caps[2].parse::<i32>().unwrap_or(0);
    if &caps[1] == "-" { -hours } else { hours }
}

/// Render an offset the way the selector and page title show it.
pub fn format_gmt_label(offset: i32) -> String {
    if offset >= 0 {
        format!("GMT+{offset}")
    } else {
        format!("GMT{offset}")
    }
}

/// Selector options from [`MIN_LISTED_OFFSET`] to [`MAX_LISTED_OFFSET`].
pub fn listed_zones() -> Vec<String> {
    (MIN_LISTED_OFFSET..=MAX_LISTED_OFFSET).map(format_gmt_label).collect()
}
