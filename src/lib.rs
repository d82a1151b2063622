//! dispatch: booking-text intake for the dispatch console.
//!
//! The binary wraps the `dispatch-core` parser in a CLI and an HTTP surface
//! and, when a directory is configured, resolves the parsed record's
//! contractor/driver/vehicle hints through `dispatch-lookup`.
//!
//! # Architecture
//!
//! ```text
//! CLI / HTTP ──► JobTextParser ──► ParseResult
//!                                     │
//!                                     └──► resolve_hints ──► Directory (HTTP)
//! ```
//!
//! Parsing is synchronous; only the directory round-trips and the server run
//! on `tokio`.

pub mod server;

use std::io::Read;
use std::path::Path;

/// Read a whole booking from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
