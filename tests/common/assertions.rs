//! Domain-specific assertion macros for dispatch harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* parse outcome was expected.

/// Assert that a `ParseResult` carries data and return the record.
///
/// ```rust
/// let record = assert_parsed!(parse_job_text(text));
/// ```
#[macro_export]
macro_rules! assert_parsed {
    ($result:expr) => {{
        match $result {
            dispatch_core::ParseResult::Data(record) => record,
            dispatch_core::ParseResult::Errors(errors) => panic!(
                "assert_parsed! failed: expected data, got errors:\n  {:#?}",
                errors
            ),
        }
    }};
}

/// Assert that a `ParseResult` carries exactly the given errors, in order.
///
/// ```rust
/// assert_parse_errors!(result, ["Customer name is required"]);
/// ```
#[macro_export]
macro_rules! assert_parse_errors {
    ($result:expr, [$($msg:expr),* $(,)?]) => {{
        let expected: Vec<String> = vec![$($msg.to_string()),*];
        match $result {
            dispatch_core::ParseResult::Errors(errors) => {
                pretty_assertions::assert_eq!(errors, expected);
            }
            dispatch_core::ParseResult::Data(record) => panic!(
                "assert_parse_errors! failed: expected errors {:?}, got data:\n  {:#?}",
                expected, record
            ),
        }
    }};
}

/// Assert a single-valued field on a `PartialJobRecord`.
///
/// ```rust
/// assert_field!(record, pickup_date, "2024-03-15");
/// assert_field!(record, dropoff_note, None);
/// ```
#[macro_export]
macro_rules! assert_field {
    ($record:expr, $field:ident, None) => {{
        let record: &dispatch_core::PartialJobRecord = &$record;
        if let Some(actual) = record.$field.as_deref() {
            panic!(
                "assert_field! failed: expected {} to be absent, found {:?}",
                stringify!($field),
                actual
            );
        }
    }};
    ($record:expr, $field:ident, $value:expr) => {{
        let record: &dispatch_core::PartialJobRecord = &$record;
        match record.$field.as_deref() {
            Some(actual) if actual == $value => {}
            Some(actual) => panic!(
                "assert_field! failed:\n  field:    {}\n  expected: {:?}\n  actual:   {:?}",
                stringify!($field),
                $value,
                actual
            ),
            None => panic!(
                "assert_field! failed: {} is absent, expected {:?}",
                stringify!($field),
                $value
            ),
        }
    }};
}
