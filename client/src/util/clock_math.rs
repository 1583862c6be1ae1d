//! Pure clock arithmetic for the offset display.
//!
//! Kept free of browser APIs so the wraparound and formatting rules can be
//! unit tested natively.

#[cfg(test)]
#[path = "clock_math_test.rs"]
mod clock_math_test;

use chrono::{DateTime, Timelike, Utc};

use super::gmt::format_gmt_label;

/// Wall-clock reading shifted into the selected zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Add `offset` hours to `utc_hour`, wrapping into `0..24`.
pub fn shift_hour(utc_hour: u32, offset: i32) -> u32 {
    let shifted = i64::from(utc_hour) + i64::from(offset);
    // rem_euclid keeps the result non-negative for any offset sign.
    u32::try_from(shifted.rem_euclid(24)).unwrap_or(0)
}

/// Read `now` as seen from `offset` hours east of UTC.
pub fn reading_at(now: DateTime<Utc>, offset: i32) -> ClockReading {
    ClockReading {
        hour: shift_hour(now.hour(), offset),
        minute: now.minute(),
        second: now.second(),
    }
}

/// Format a reading as zero-padded `HH:MM:SS`.
pub fn format_hms(reading: ClockReading) -> String {
    format!("{:02}:{:02}:{:02}", reading.hour, reading.minute, reading.second)
}

/// Browser tab title for the selected offset.
pub fn page_title(offset: i32) -> String {
    format!("RTClock | {}", format_gmt_label(offset))
}
