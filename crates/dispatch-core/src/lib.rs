//! dispatch-core: booking-text intake for the dispatch console.
//!
//! This crate turns semi-structured pasted text (typically an e-mailed
//! booking confirmation) into a sparse job record that pre-fills the
//! job-creation form, plus the shared types used by the other crates.
//!
//! # Pipeline
//!
//! ```text
//! text ──► line classifier ──► rule table ──► synonym table
//!                                   │
//!              date/time + passenger extractors
//!                                   ▼
//!                 vehicle normaliser ──► required-field validator ──► ParseResult
//! ```
//!
//! Everything here is synchronous and free of I/O. Resolving the record's
//! contractor/driver/vehicle hints lives in `dispatch-lookup`.

pub mod config;
pub mod datetime;
pub mod error;
pub mod parser;
pub mod passenger;
pub mod text;
pub mod types;
pub mod validate;
pub mod vehicle;

pub use error::{ConfigError, ParseError};
pub use parser::{parse_job_text, JobTextParser};
pub use types::{ExtraService, JobField, ParseResult, PartialJobRecord};
