//! Display formatting.
//!
//! Plain variants produce exactly the strings shown to the user. Markup
//! variants wrap parts of the same strings in `[b]` / `[color]` tags for the
//! UI layer's label parser.

use chrono::{NaiveTime, Timelike};

/// Whole centiseconds in `secs`, floored. Negative and non-finite input
/// counts as zero.
pub fn total_centis(secs: f64) -> u64 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for huge totals.
    let whole = secs.floor() as u64;
    let centis = (secs * 100.0).floor() as u64;
    // Just below a whole second `secs * 100.0` can round up to it.
    centis.min(whole.saturating_mul(100).saturating_add(99))
}

/// Splits `secs` into `(minutes, seconds, centiseconds)`.
///
/// minutes = ⌊t / 60⌋, seconds = ⌊t mod 60⌋, centiseconds = ⌊t·100 mod 100⌋,
/// all derived from one integer so the three fields never disagree.
pub fn split_stopwatch(secs: f64) -> (u64, u64, u64) {
    let centis = total_centis(secs);
    let whole = centis / 100;
    (whole / 60, whole % 60, centis % 100)
}

/// `MM:SS.CC`, each field zero-padded to two digits.
///
/// Minutes widen past 99 rather than wrapping.
pub fn format_stopwatch(secs: f64) -> String {
    let (m, s, c) = split_stopwatch(secs);
    format!("{m:02}:{s:02}.{c:02}")
}

/// Stopwatch markup with the centiseconds de-emphasised.
pub fn stopwatch_markup(secs: f64, dim_color: &str) -> String {
    let (m, s, c) = split_stopwatch(secs);
    format!("{m:02}:{s:02}.[color={dim_color}]{c:02}[/color]")
}

/// `HH:MM:SS`, 24-hour, zero-padded.
pub fn format_wall_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Wall clock markup with the hours in bold.
pub fn wall_clock_markup(time: NaiveTime) -> String {
    format!("[b]{:02}[/b]:{:02}:{:02}", time.hour(), time.minute(), time.second())
}
