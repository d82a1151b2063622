//! dispatch-lookup: resolving parser hints against live directories.
//!
//! The parser only ever emits `contractor_name`, `driver_name` and
//! `vehicle_name` as free text. Before a job is saved the form has to turn
//! those into real references; this crate fetches the candidate lists from a
//! [`Directory`] and matches the hints against them.

pub mod http;
pub mod matcher;
pub mod memory;
pub mod resolve;

pub use http::HttpDirectory;
pub use matcher::{match_name, Resolution};
pub use memory::StaticDirectory;
pub use resolve::{resolve_hints, ResolvedHints};

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// An entry in one of the backend's lookup lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Which lookup list a hint is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Contractor,
    Driver,
    Vehicle,
}

impl RefKind {
    /// Path segment of the list endpoint.
    pub fn path(self) -> &'static str {
        match self {
            RefKind::Contractor => "contractors",
            RefKind::Driver => "drivers",
            RefKind::Vehicle => "vehicles",
        }
    }
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefKind::Contractor => write!(f, "contractor"),
            RefKind::Driver => write!(f, "driver"),
            RefKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// Source of contractor, driver and vehicle lists.
pub trait Directory: Send + Sync {
    fn list(&self, kind: RefKind) -> impl Future<Output = Result<Vec<NamedRef>, LookupError>> + Send;
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid directory URL {0:?}")]
    InvalidUrl(String),

    #[error("directory request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),

    #[error("directory response could not be read: {0}")]
    Body(#[from] hyper::Error),

    #[error("directory returned {status} for /{path}")]
    Status { status: u16, path: &'static str },

    #[error("directory response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("directory request timed out after {0:?}")]
    Timeout(std::time::Duration),
}
