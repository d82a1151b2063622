//! Prioritised routing rules.
//!
//! Each line is offered to [`RULES`] in order and the first rule whose key
//! predicate matches handles it. Lines no rule claims fall through to the
//! synonym table.

use super::line::KeyValue;
use super::Draft;
use crate::config::{AddressNoteDefault, ParserConfig};
use crate::datetime::extract_date_time;
use crate::passenger::extract_passenger;
use crate::types::ExtraService;

const PICKUP_NOTE_KEYS: &[&str] = &["pu address note", "pickup address note", "pick up address note"];
const DROPOFF_NOTE_KEYS: &[&str] = &["do address note", "dropoff address note", "drop off address note"];

/// Key predicate of a rule.
#[derive(Debug, Clone, Copy)]
pub enum KeyMatch {
    /// Lower-cased key contains any of the needles.
    Contains(&'static [&'static str]),
    /// Lower-cased key equals one of the names.
    Equals(&'static [&'static str]),
}

impl KeyMatch {
    pub fn matches(&self, line: &KeyValue<'_>) -> bool {
        match self {
            KeyMatch::Contains(needles) => line.key_contains_any(needles),
            KeyMatch::Equals(names) => line.key_is_any(names),
        }
    }
}

pub type Handler = fn(&mut Draft, &KeyValue<'_>, &ParserConfig);

pub struct Rule {
    pub name: &'static str,
    pub key: KeyMatch,
    pub apply: Handler,
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "pickup_date_time",
        key: KeyMatch::Contains(&["pick up date and time"]),
        apply: pickup_date_time,
    },
    Rule {
        name: "passenger_details",
        key: KeyMatch::Contains(&["passenger details"]),
        apply: passenger_details,
    },
    Rule {
        name: "flight_details",
        key: KeyMatch::Contains(&["flight details"]),
        apply: |draft, line, _| draft.flight_details = Some(line.value.to_string()),
    },
    Rule {
        name: "report",
        key: KeyMatch::Contains(&["report"]),
        apply: |draft, line, _| draft.remark("Report", line.value),
    },
    Rule {
        name: "booking_note",
        key: KeyMatch::Contains(&["system booking note", "booking note"]),
        apply: |draft, line, _| draft.remark("System Booking Note", line.value),
    },
    Rule {
        name: "driver_notes",
        key: KeyMatch::Contains(&["driver notes"]),
        apply: |draft, line, _| draft.remark("Driver Notes", line.value),
    },
    Rule {
        name: "contractor",
        key: KeyMatch::Contains(&["contractor", "assigned to"]),
        apply: |draft, line, _| draft.record.contractor_name = Some(line.value.to_string()),
    },
    Rule {
        name: "passenger_count",
        key: KeyMatch::Contains(&["number of passengers"]),
        apply: passenger_count,
    },
    Rule {
        name: "child_seat",
        key: KeyMatch::Contains(&["toddler seat", "infant seat"]),
        apply: |draft, line, _| draft.remark(line.key, line.value),
    },
    Rule {
        name: "pickup_note",
        key: KeyMatch::Contains(PICKUP_NOTE_KEYS),
        apply: |draft, line, _| draft.record.pickup_note = Some(line.value.to_string()),
    },
    Rule {
        name: "address_note",
        key: KeyMatch::Contains(&[
            "do address note",
            "dropoff address note",
            "drop off address note",
            "address note",
        ]),
        apply: address_note,
    },
    Rule {
        name: "special_remarks",
        key: KeyMatch::Contains(&["special remarks"]),
        apply: |draft, line, _| draft.remark("Special Remarks", line.value),
    },
    Rule {
        name: "driver",
        key: KeyMatch::Equals(&["driver"]),
        apply: |draft, line, _| draft.record.driver_name = Some(line.value.to_string()),
    },
    Rule {
        name: "vehicle",
        key: KeyMatch::Equals(&["vehicle"]),
        apply: |draft, line, _| draft.record.vehicle_name = Some(line.value.to_string()),
    },
    Rule {
        name: "extra_services",
        key: KeyMatch::Contains(&["extra services"]),
        apply: extra_services,
    },
];

/// First rule claiming `line`, if any.
pub fn route(line: &KeyValue<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.key.matches(line))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn pickup_date_time(draft: &mut Draft, line: &KeyValue<'_>, _: &ParserConfig) {
    let parts = extract_date_time(line.value);
    if let (Some(date), Some(time)) = (parts.date, parts.time) {
        draft.record.pickup_date = Some(date);
        draft.record.pickup_time = Some(time);
    } else {
        tracing::debug!(value = line.value, "pick up date and time not recognised");
    }
}

fn passenger_details(draft: &mut Draft, line: &KeyValue<'_>, _: &ParserConfig) {
    let info = extract_passenger(line.value);
    if info.name.is_some() {
        draft.record.passenger_name = info.name;
    }
    if info.mobile.is_some() {
        draft.record.passenger_mobile = info.mobile;
    }
    if info.email.is_some() {
        draft.record.passenger_email = info.email;
    }
}

/// Only a leading integer counts; anything else is dropped silently.
fn passenger_count(draft: &mut Draft, line: &KeyValue<'_>, _: &ParserConfig) {
    let digits: String = line.value.chars().take_while(char::is_ascii_digit).collect();
    if let Ok(n) = digits.parse::<u32>() {
        draft.remark("Number of Passengers", &n.to_string());
    }
}

fn address_note(draft: &mut Draft, line: &KeyValue<'_>, config: &ParserConfig) {
    let value = Some(line.value.to_string());
    if line.key_contains_any(DROPOFF_NOTE_KEYS) {
        draft.record.dropoff_note = value;
        return;
    }
    match config.address_note_default {
        AddressNoteDefault::Dropoff => draft.record.dropoff_note = value,
        AddressNoteDefault::Pickup => draft.record.pickup_note = value,
        AddressNoteDefault::Ignore => {
            tracing::debug!(key = line.key, "unqualified address note ignored");
        }
    }
}

fn extra_services(draft: &mut Draft, line: &KeyValue<'_>, _: &ParserConfig) {
    draft.extra_services.extend(
        line.value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ExtraService::unpriced),
    );
}
