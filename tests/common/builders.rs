//! Test builders: ergonomic constructors for booking texts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use super::fixtures::BOOKING_MINIMAL;

// ---------------------------------------------------------------------------
// BookingBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for pasted booking texts.
///
/// # Example
///
/// ```rust
/// let text = BookingBuilder::minimal()
///     .line("Flight Details", "SQ 321")
///     .line("Type of Vehicle", "combi")
///     .build();
/// ```
pub struct BookingBuilder {
    lines: Vec<String>,
}

impl BookingBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Start from the four required lines.
    pub fn minimal() -> Self {
        Self {
            lines: BOOKING_MINIMAL.lines().map(str::to_string).collect(),
        }
    }

    pub fn line(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{key}: {value}"));
        self
    }

    pub fn raw(mut self, raw: &str) -> Self {
        self.lines.push(raw.to_string());
        self
    }

    /// Drop every line whose key starts with `key` (case-insensitive).
    pub fn without(mut self, key: &str) -> Self {
        let key = key.to_lowercase();
        self.lines.retain(|l| !l.to_lowercase().starts_with(&key));
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
