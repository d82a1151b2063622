//! Line classifier: splits pasted text into `key: value` pairs.

/// One `key: value` line.
///
/// Only the first colon delimits the key, so values such as `9:05` or URLs
/// survive intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<'a> {
    /// Key as written, trimmed.
    pub key: &'a str,
    /// Lower-cased key, used for every match.
    pub lower: String,
    /// Value after the first colon, trimmed.
    pub value: &'a str,
}

impl KeyValue<'_> {
    pub fn key_contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }

    pub fn key_is_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.lower == *n)
    }
}

/// Trimmed, non-empty lines that carry a colon and a non-empty value.
pub fn key_values(text: &str) -> impl Iterator<Item = KeyValue<'_>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            Some(KeyValue {
                key,
                lower: key.to_lowercase(),
                value,
            })
        })
}
