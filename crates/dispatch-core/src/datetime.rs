//! Pick-up date/time extraction.
//!
//! Recognises `D/M/YYYY H:MM` and then `D-M-YYYY H:MM`, with an optional
//! `am`/`pm` suffix. No timezone conversion happens here: the text is taken to
//! be in the viewer's local time and the receiving system owns any UTC
//! conversion.

use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SLASH_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2})(?:\s*([ap])\.?m\b)?")
        .expect("slash date pattern must compile")
});

static DASH_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})-(\d{1,2})-(\d{4})\s+(\d{1,2}):(\d{2})(?:\s*([ap])\.?m\b)?")
        .expect("dash date pattern must compile")
});

/// Date and time pulled out of a combined value.
///
/// Both are set on a match. When nothing matches, `time` carries the input
/// verbatim and `date` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeParts {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time: Option<String>,
}

impl DateTimeParts {
    /// True when both halves were recognised.
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

/// Split a combined date/time value into `YYYY-MM-DD` and `HH:MM`.
///
/// Within each format the first occurrence that is a real calendar date and
/// clock time is used, so `"31/2/2024 9:05 or 1/3/2024 10:00"` yields the
/// second one.
///
/// An `am`/`pm` suffix directly after the minutes is applied to the hour:
/// `"15/3/2024 9:05 PM"` gives `"21:05"`, not the `"09:05"` a plain
/// `H:MM` reading would. Hours outside `1..=12` with a suffix do not match.
pub fn extract_date_time(input: &str) -> DateTimeParts {
    for pattern in [&*SLASH_FORMAT, &*DASH_FORMAT] {
        if let Some((date, time)) = pattern.captures_iter(input).find_map(|caps| to_naive(&caps)) {
            return DateTimeParts {
                date: Some(date.format("%Y-%m-%d").to_string()),
                time: Some(time.format("%H:%M").to_string()),
            };
        }
    }

    DateTimeParts {
        date: None,
        time: Some(input.to_string()),
    }
}

fn to_naive(caps: &Captures<'_>) -> Option<(NaiveDate, NaiveTime)> {
    let num = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    let (day, month, year) = (num(1)?, num(2)?, num(3)?);
    let (mut hour, minute) = (num(4)?, num(5)?);

    if let Some(meridiem) = caps.get(6) {
        if hour == 0 || hour > 12 {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("p");
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }

    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((date, time))
}
