//! Passenger details extraction.
//!
//! Booking systems paste the lead passenger as one value, e.g.
//! `*Mr John Tan*: +65 9123 4567` or `Jane Doe jane@x.com 91234567`. The
//! extractor pulls out the e-mail first, then splits name from phone either at
//! a colon or around the first digit-heavy run.

use crate::text::{collapse_whitespace, non_empty};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern must compile")
});

/// At least 8 characters of digits, spaces, hyphens, parentheses and `+`,
/// starting and ending on a digit (or an opening `+`/`(`).
static PHONE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\(?\d[\d\s\-()]{6,}\d").expect("phone pattern must compile")
});

static HONORIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mrs|mr|ms|miss|mdm|dr)\.?\s+").expect("honorific pattern must compile")
});

/// Name, mobile and e-mail found in a passenger value. Each is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerInfo {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

pub fn extract_passenger(input: &str) -> PassengerInfo {
    let mut info = PassengerInfo::default();

    let remaining = match EMAIL.find(input) {
        Some(m) => {
            info.email = Some(m.as_str().to_string());
            format!("{}{}", &input[..m.start()], &input[m.end()..])
        }
        None => input.to_string(),
    };

    if let Some((name, phone)) = remaining.split_once(':') {
        info.name = clean_name(&name.replace('*', ""));
        info.mobile = normalize_phone(phone);
    } else if let Some(m) = PHONE_RUN.find(&remaining) {
        info.mobile = normalize_phone(m.as_str());
        let rest = format!("{} {}", &remaining[..m.start()], &remaining[m.end()..]);
        let rest: String = rest
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | ','))
            .collect();
        info.name = clean_name(&rest);
    } else {
        info.name = clean_name(&remaining);
    }

    info
}

fn clean_name(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw);
    let name = HONORIFIC.replace(&collapsed, "");
    non_empty(name.trim().to_string())
}

/// Keep digits, and a `+` only when it leads the number.
fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let mut phone = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        phone.push('+');
    }
    phone.extend(trimmed.chars().filter(char::is_ascii_digit));

    if phone.chars().any(|c| c.is_ascii_digit()) {
        Some(phone)
    } else {
        None
    }
}
