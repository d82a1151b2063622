//! Parser: turns pasted booking text into a [`PartialJobRecord`].
//!
//! Each `key: value` line is routed through the prioritised [`rules`] table,
//! then the [`synonyms`] table. Once every line is consumed the remarks are
//! assembled (flight details first), the vehicle type is canonicalised and
//! the required fields are checked.
//!
//! The parser holds only immutable configuration. Every call builds fresh
//! accumulators, so one instance can serve any number of threads.

pub mod line;
pub mod rules;
pub mod synonyms;

use crate::config::ParserConfig;
use crate::error::{ConfigError, ParseError};
use crate::text::collapse_whitespace;
use crate::types::{ExtraService, JobField, ParseResult, PartialJobRecord};
use crate::validate::missing_required;
use crate::vehicle::VehicleTypeTable;
use std::sync::LazyLock;
use synonyms::SynonymTable;

static DEFAULT_PARSER: LazyLock<JobTextParser> = LazyLock::new(|| {
    JobTextParser::new(&ParserConfig::default()).expect("default parser config must be valid")
});

/// Parse with the built-in configuration.
pub fn parse_job_text(text: &str) -> ParseResult {
    DEFAULT_PARSER.parse(text)
}

/// Field accumulator for a single parse call.
#[derive(Debug, Default)]
pub struct Draft {
    pub record: PartialJobRecord,
    pub remarks: Vec<String>,
    pub flight_details: Option<String>,
    pub extra_services: Vec<ExtraService>,
}

impl Draft {
    pub fn remark(&mut self, label: &str, value: &str) {
        self.remarks.push(format!("{label}: {value}"));
    }

    fn finish(mut self) -> PartialJobRecord {
        if let Some(flight) = self.flight_details.take() {
            self.remarks.insert(0, format!("Flight Details: {flight}"));
        }
        if !self.remarks.is_empty() {
            self.record.remarks = Some(self.remarks.join("\n"));
        }
        self.record.extra_services = self.extra_services;
        self.record
    }
}

/// Booking-text parser built from a [`ParserConfig`].
#[derive(Debug, Clone)]
pub struct JobTextParser {
    config: ParserConfig,
    synonyms: SynonymTable,
    vehicles: VehicleTypeTable,
}

impl JobTextParser {
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        if config.max_input_bytes == Some(0) {
            return Err(ConfigError::ZeroInputLimit);
        }
        if config.field_synonyms.keys().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::BlankSynonym);
        }
        if let Some((alias, _)) = config
            .vehicle_aliases
            .iter()
            .find(|(_, display)| display.trim().is_empty())
        {
            return Err(ConfigError::BlankVehicleAlias(alias.clone()));
        }

        Ok(Self {
            config: config.clone(),
            synonyms: SynonymTable::new(&config.field_synonyms),
            vehicles: VehicleTypeTable::with_aliases(&config.vehicle_aliases),
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse and validate. Never panics and never returns `Err`: failures
    /// become a single `"Failed to parse text: ..."` message.
    pub fn parse(&self, text: &str) -> ParseResult {
        match self.extract(text) {
            Ok(record) => {
                let errors = missing_required(&record);
                if errors.is_empty() {
                    ParseResult::Data(record)
                } else {
                    tracing::debug!(missing = errors.len(), "parsed record failed validation");
                    ParseResult::Errors(errors)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse text");
                ParseResult::Errors(vec![format!("Failed to parse text: {e}")])
            }
        }
    }

    /// Build the field map without validating required fields.
    pub fn extract(&self, text: &str) -> Result<PartialJobRecord, ParseError> {
        if let Some(limit) = self.config.max_input_bytes {
            if text.len() > limit {
                return Err(ParseError::InputTooLarge {
                    actual: text.len(),
                    limit,
                });
            }
        }

        let mut draft = Draft::default();

        for kv in line::key_values(text) {
            if let Some(rule) = rules::route(&kv) {
                tracing::debug!(rule = rule.name, key = kv.key, "routed line");
                (rule.apply)(&mut draft, &kv, &self.config);
            } else if let Some(field) = self.synonyms.field_for(&kv.lower) {
                tracing::debug!(field = %field, key = kv.key, "mapped line");
                let value = match field {
                    JobField::CustomerName => collapse_whitespace(kv.value),
                    _ => kv.value.to_string(),
                };
                *draft.record.slot_mut(field) = Some(value);
            }
        }

        let mut record = draft.finish();
        if let Some(raw) = record.vehicle_type.take() {
            record.vehicle_type = Some(self.vehicles.normalize(&raw));
        }
        Ok(record)
    }
}

impl Default for JobTextParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}
