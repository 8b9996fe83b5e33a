//! Opening-hours formatting
//!
//! The places endpoint passes through raw OSM-style opening-hours strings
//! (`"Mo-Fr 11:00-22:00; Sa 12:00-23:00"`). This formatter rewrites the
//! 24-hour ranges into 12-hour labels and splits segments onto lines.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    // Hand-checked pattern; only fails to compile if edited.
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(\d{1,2}):(\d{2})-(\d{1,2}):(\d{2})").unwrap()
});

fn format_time(hh: &str, mm: &str) -> String {
    let mut h: i32 = hh.parse().unwrap_or(0);
    let m: i32 = mm.parse().unwrap_or(0);
    let suffix = if h >= 12 { "pm" } else { "am" };
    if h == 0 {
        h = 12;
    } else if h > 12 {
        h -= 12;
    }
    format!("{h}:{m:02} {suffix}")
}

/// Pretty-print a raw opening-hours string, or `None` when it is empty.
pub fn pretty_hours(raw: &str) -> Option<String> {
    let segments: Vec<&str> =
        raw.split(';').map(str::trim).filter(|segment| !segment.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    let nice: Vec<String> = segments
        .iter()
        .map(|segment| {
            TIME_RANGE
                .replace_all(segment, |caps: &Captures<'_>| {
                    format!(
                        "{} – {}",
                        format_time(&caps[1], &caps[2]),
                        format_time(&caps[3], &caps[4])
                    )
                })
                .into_owned()
        })
        .collect();

    Some(nice.join("\n"))
}
