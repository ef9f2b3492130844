//! Countdown domain: target instant and remaining-time formatting.

/// The moment the countdown runs out: 2025-10-25 03:30:00 UTC,
/// which is 10:30 PM America/Chicago (CDT, UTC-5) on 2025-10-24.
pub const TARGET_UNIX_MS: i64 = 1_761_363_000_000;

/// Milliseconds left until the target from the given unix-epoch instant.
/// Negative once the target has passed.
pub fn remaining_ms(now_unix_ms: i64) -> i64 {
    TARGET_UNIX_MS - now_unix_ms
}

/// Format a remaining span as zero-padded `HH:MM:SS`.
///
/// Hours are total hours and may exceed 24; anything at or past the target
/// renders as the terminal "00:00:00".
pub fn format_remaining(ms: i64) -> String {
    if ms <= 0 {
        return "00:00:00".to_string();
    }
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
