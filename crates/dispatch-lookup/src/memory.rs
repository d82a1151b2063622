//! In-memory directory, for tests and for callers that already hold the lists.

use crate::{Directory, LookupError, NamedRef, RefKind};
use std::future::Future;

#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    pub contractors: Vec<NamedRef>,
    pub drivers: Vec<NamedRef>,
    pub vehicles: Vec<NamedRef>,
}

impl StaticDirectory {
    pub fn with(mut self, kind: RefKind, entry: NamedRef) -> Self {
        match kind {
            RefKind::Contractor => self.contractors.push(entry),
            RefKind::Driver => self.drivers.push(entry),
            RefKind::Vehicle => self.vehicles.push(entry),
        }
        self
    }

    fn entries(&self, kind: RefKind) -> &[NamedRef] {
        match kind {
            RefKind::Contractor => &self.contractors,
            RefKind::Driver => &self.drivers,
            RefKind::Vehicle => &self.vehicles,
        }
    }
}

impl Directory for StaticDirectory {
    fn list(&self, kind: RefKind) -> impl Future<Output = Result<Vec<NamedRef>, LookupError>> + Send {
        let entries = self.entries(kind).to_vec();
        async move { Ok(entries) }
    }
}
