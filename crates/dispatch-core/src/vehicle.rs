//! Vehicle type normalisation.
//!
//! Booking partners spell vehicle classes their own way ("COMBI", "E Class
//! sedan"...). The dispatch console only accepts the fleet's display names, so
//! every pasted type is mapped through a static table. An unknown type maps to
//! `""` so the form forces the dispatcher to pick one.

use crate::text::collapse_whitespace;
use std::collections::BTreeMap;

/// Built-in aliases, keyed by lower-cased, whitespace-collapsed text.
static VEHICLE_TYPES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "combi" => "Premium 6 Seater",
    "premium 6 seater" => "Premium 6 Seater",
    "e-class sedan" => "E-Class Sedan",
    "e class sedan" => "E-Class Sedan",
    "v-class (7 seater)" => "V-Class (7 Seater)",
    "v class (7 seater)" => "V-Class (7 Seater)",
    "coach (13 seater)" => "Coach (13 Seater)",
    "coach (23 seater)" => "Coach (23 Seater)",
    "coach (45 seater)" => "Coach (45 Seater)",
};

/// Lookup over configured aliases layered on the built-in table.
#[derive(Debug, Clone, Default)]
pub struct VehicleTypeTable {
    aliases: BTreeMap<String, String>,
}

impl VehicleTypeTable {
    /// Build a table with extra aliases that take precedence over the
    /// built-in entries. Alias keys are matched case-insensitively.
    pub fn with_aliases<'a, I>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(k, v)| (lookup_key(k), v.trim().to_string()))
                .collect(),
        }
    }

    /// Canonical display name for `raw`, if known.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        let key = lookup_key(raw);
        self.aliases
            .get(&key)
            .map(String::as_str)
            .or_else(|| VEHICLE_TYPES.get(key.as_str()).copied())
    }

    /// Canonical display name for `raw`, or `""` when it is not recognised.
    pub fn normalize(&self, raw: &str) -> String {
        match self.lookup(raw) {
            Some(canonical) => canonical.to_string(),
            None => {
                tracing::warn!(vehicle_type = raw, "unrecognised vehicle type, clearing");
                String::new()
            }
        }
    }
}

fn lookup_key(raw: &str) -> String {
    collapse_whitespace(raw).to_lowercase()
}
