//! Countdown domain: formatting and terminal-state tests.

use chrono::{TimeZone, Utc};

use super::clock::{TARGET_UNIX_MS, format_remaining, remaining_ms};

fn unix_ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .timestamp_millis()
}

// -----------------------------------------------------------------------------
// Target instant
// -----------------------------------------------------------------------------

#[test]
fn test_target_is_oct_25_0330_utc() {
    assert_eq!(TARGET_UNIX_MS, unix_ms(2025, 10, 25, 3, 30, 0));
}

// -----------------------------------------------------------------------------
// Formatting
// -----------------------------------------------------------------------------

#[test]
fn test_format_zero_pads_every_field() {
    assert_eq!(format_remaining(1_000), "00:00:01");
    assert_eq!(format_remaining(61_000), "00:01:01");
    assert_eq!(format_remaining(3_661_000), "01:01:01");
}

#[test]
fn test_format_hours_exceed_a_day() {
    // 25 hours, 1 minute, 1 second; hours are not wrapped at 24.
    assert_eq!(format_remaining(90_061_000), "25:01:01");
}

#[test]
fn test_format_truncates_subsecond_remainder() {
    assert_eq!(format_remaining(1_999), "00:00:01");
    assert_eq!(format_remaining(999), "00:00:00");
}

#[test]
fn test_format_at_or_past_target_is_terminal() {
    assert_eq!(format_remaining(0), "00:00:00");
    assert_eq!(format_remaining(-1), "00:00:00");
    assert_eq!(format_remaining(i64::MIN / 2), "00:00:00");
}

// -----------------------------------------------------------------------------
// Remaining time against simulated clocks
// -----------------------------------------------------------------------------

#[test]
fn test_one_minute_before_target() {
    let now = unix_ms(2025, 10, 25, 3, 29, 0);
    assert_eq!(format_remaining(remaining_ms(now)), "00:01:00");
}

#[test]
fn test_just_past_target() {
    let now = unix_ms(2025, 10, 25, 3, 30, 1);
    assert!(remaining_ms(now) < 0);
    assert_eq!(format_remaining(remaining_ms(now)), "00:00:00");
}

#[test]
fn test_every_instant_past_target_renders_terminal() {
    for offset_secs in [0, 1, 60, 3600, 86_400, 10 * 86_400] {
        let now = TARGET_UNIX_MS + offset_secs * 1000;
        assert_eq!(format_remaining(remaining_ms(now)), "00:00:00");
    }
}

#[test]
fn test_countdown_stays_live_before_target() {
    let mut state = super::CountdownState::default();
    state.record_paint(remaining_ms(unix_ms(2025, 10, 25, 3, 29, 0)));

    assert!(state.painted_once);
    assert!(!state.finished);
    assert!(state.is_active());
}

#[test]
fn test_countdown_becomes_terminal_once_target_passes() {
    let mut state = super::CountdownState::default();
    state.record_paint(remaining_ms(unix_ms(2025, 10, 25, 3, 30, 1)));

    assert!(state.finished);
    assert!(!state.is_active());

    // Later paints cannot revive a finished countdown.
    state.record_paint(remaining_ms(unix_ms(2025, 10, 25, 3, 0, 0)));
    assert!(state.finished);
}

#[test]
fn test_countdown_terminal_exactly_at_target() {
    let mut state = super::CountdownState::default();
    state.record_paint(remaining_ms(TARGET_UNIX_MS));
    assert!(state.finished);
}
