//! Key synonyms for plain field assignments.
//!
//! Consulted only after every routing rule has declined a line. Entries are
//! substring matches against the lower-cased key and the first hit wins, so
//! more specific phrases come before shorter ones.

use crate::types::JobField;

pub const BUILTIN_SYNONYMS: &[(&str, JobField)] = &[
    ("customer account", JobField::CustomerName),
    ("customer name", JobField::CustomerName),
    ("booking reference", JobField::BookingRef),
    ("booking number", JobField::BookingRef),
    ("booking ref", JobField::BookingRef),
    ("booking no", JobField::BookingRef),
    ("booking id", JobField::BookingRef),
    ("type of vehicle", JobField::VehicleType),
    ("vehicle type", JobField::VehicleType),
    ("pick up location", JobField::PickupLocation),
    ("pick-up location", JobField::PickupLocation),
    ("pickup location", JobField::PickupLocation),
    ("pu location", JobField::PickupLocation),
    ("drop off location", JobField::DropoffLocation),
    ("drop-off location", JobField::DropoffLocation),
    ("dropoff location", JobField::DropoffLocation),
    ("do location", JobField::DropoffLocation),
    ("service type", JobField::ServiceType),
    ("type of service", JobField::ServiceType),
    ("passenger email", JobField::PassengerEmail),
    ("customer email", JobField::CustomerEmail),
    ("customer mobile", JobField::CustomerMobile),
    ("customer phone", JobField::CustomerMobile),
    ("customer contact", JobField::CustomerMobile),
];

/// Ordered synonym table: configured entries (longest first) followed by the
/// built-in ones.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<(String, JobField)>,
}

impl SynonymTable {
    pub fn new<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a JobField)>,
    {
        let mut configured: Vec<(String, JobField)> = extra
            .into_iter()
            .map(|(k, f)| (k.trim().to_lowercase(), *f))
            .collect();
        configured.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let builtin = BUILTIN_SYNONYMS
            .iter()
            .map(|(k, f)| (k.to_string(), *f));

        Self {
            entries: configured.into_iter().chain(builtin).collect(),
        }
    }

    /// Field targeted by a lower-cased key, if any.
    pub fn field_for(&self, lower_key: &str) -> Option<JobField> {
        self.entries
            .iter()
            .find(|(needle, _)| lower_key.contains(needle.as_str()))
            .map(|(_, field)| *field)
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
