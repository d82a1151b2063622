use crate::matcher::{match_name, Resolution};
use crate::{Directory, LookupError, RefKind};
use dispatch_core::PartialJobRecord;
use serde::Serialize;

/// Outcome for each hint present on the record. A hint the record does not
/// carry stays `None` and its list is never fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Resolution>,
}

/// Resolve the record's contractor, driver and vehicle hints. The lists are
/// fetched concurrently; the first directory failure aborts the whole call.
pub async fn resolve_hints<D: Directory>(
    directory: &D,
    record: &PartialJobRecord,
) -> Result<ResolvedHints, LookupError> {
    let (contractor, driver, vehicle) = tokio::try_join!(
        resolve_one(directory, RefKind::Contractor, record.contractor_name.as_deref()),
        resolve_one(directory, RefKind::Driver, record.driver_name.as_deref()),
        resolve_one(directory, RefKind::Vehicle, record.vehicle_name.as_deref()),
    )?;

    Ok(ResolvedHints {
        contractor,
        driver,
        vehicle,
    })
}

async fn resolve_one<D: Directory>(
    directory: &D,
    kind: RefKind,
    hint: Option<&str>,
) -> Result<Option<Resolution>, LookupError> {
    let Some(hint) = hint.filter(|h| !h.trim().is_empty()) else {
        return Ok(None);
    };
    let candidates = directory.list(kind).await?;
    let resolution = match_name(hint, &candidates);
    tracing::debug!(kind = %kind, hint, ?resolution, "resolved hint");
    Ok(Some(resolution))
}
