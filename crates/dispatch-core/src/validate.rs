//! Required-field validation of a parsed record.

use crate::types::{JobField, PartialJobRecord};

/// Fields a job cannot be created without, with the message shown when one
/// is missing. Order is the order messages are reported in.
pub const REQUIRED_FIELDS: &[(JobField, &str)] = &[
    (JobField::CustomerName, "Customer name is required"),
    (JobField::PickupDate, "Pick up date is required"),
    (JobField::PickupTime, "Pick up time is required"),
    (JobField::PickupLocation, "Pick up location is required"),
    (JobField::DropoffLocation, "Drop off location is required"),
];

/// Collect one message per missing or blank required field.
pub fn missing_required(record: &PartialJobRecord) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(field, _)| record.get(*field).map_or(true, |v| v.trim().is_empty()))
        .map(|(_, message)| message.to_string())
        .collect()
}
