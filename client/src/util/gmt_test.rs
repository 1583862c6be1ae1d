use super::*;

#[test]
fn parse_gmt_offset_reads_positive_offsets() {
    assert_eq!(parse_gmt_offset("GMT+5"), 5);
    assert_eq!(parse_gmt_offset("GMT+14"), 14);
}

#[test]
fn parse_gmt_offset_reads_negative_offsets() {
    assert_eq!(parse_gmt_offset("GMT-3"), -3);
    assert_eq!(parse_gmt_offset("GMT-12"), -12);
}

#[test]
fn parse_gmt_offset_treats_missing_sign_as_positive() {
    assert_eq!(parse_gmt_offset("GMT7"), 7);
}

#[test]
fn parse_gmt_offset_is_case_insensitive_and_trims() {
    assert_eq!(parse_gmt_offset("  gmt-4  "), -4);
    assert_eq!(parse_gmt_offset("Gmt+9"), 9);
}

#[test]
fn parse_gmt_offset_allows_whitespace_after_prefix() {
    assert_eq!(parse_gmt_offset("GMT  -2"), -2);
}

#[test]
fn parse_gmt_offset_finds_pattern_inside_longer_text() {
    assert_eq!(parse_gmt_offset("(GMT+3) Moscow"), 3);
}

#[test]
fn parse_gmt_offset_falls_back_to_zero() {
    assert_eq!(parse_gmt_offset("GMT"), 0);
    assert_eq!(parse_gmt_offset("garbage"), 0);
    assert_eq!(parse_gmt_offset(""), 0);
    assert_eq!(parse_gmt_offset("GMT+"), 0);
}

#[test]
fn parse_gmt_offset_zero_on_digit_overflow() {
    assert_eq!(parse_gmt_offset("GMT+99999999999"), 0);
}

#[test]
fn format_gmt_label_signs_every_offset() {
    assert_eq!(format_gmt_label(0), "GMT+0");
    assert_eq!(format_gmt_label(5), "GMT+5");
    assert_eq!(format_gmt_label(-3), "GMT-3");
}

#[test]
fn listed_zones_span_selector_range() {
    let zones = listed_zones();
    assert_eq!(zones.len(), 27);
    assert_eq!(zones.first().map(String::as_str), Some("GMT-12"));
    assert_eq!(zones.last().map(String::as_str), Some("GMT+14"));
    assert!(zones.iter().any(|z| z == DEFAULT_ZONE));
}

#[test]
fn listed_zones_parse_back_to_their_offsets() {
    for (zone, expected) in listed_zones().iter().zip(MIN_LISTED_OFFSET..=MAX_LISTED_OFFSET) {
        assert_eq!(parse_gmt_offset(zone), expected);
    }
}

#[test]
fn parse_gmt_offset_stops_at_non_ascii_digits() {
    assert_eq!(parse_gmt_offset("GMT+5\u{0663}"), 5);
    assert_eq!(parse_gmt_offset("GMT-\u{0663}"), 0);
}
