use thiserror::Error;

/// Failures raised while parsing a single block of text.
///
/// These never reach the caller of [`JobTextParser::parse`](crate::parser::JobTextParser::parse)
/// as `Err`; they are folded into a one-element error list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is {actual} bytes, limit is {limit}")]
    InputTooLarge { actual: usize, limit: usize },
}

/// Invalid parser configuration, reported when the parser is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field synonym keys must not be blank")]
    BlankSynonym,

    #[error("vehicle alias {0:?} maps to a blank display name")]
    BlankVehicleAlias(String),

    #[error("max_input_bytes must be greater than zero")]
    ZeroInputLimit,
}
