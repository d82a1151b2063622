//! Core types for dispatch-core.
//!
//! This module defines the records that cross the parser boundary: the sparse
//! [`PartialJobRecord`] handed to the job-creation form, its
//! [`ExtraService`] entries, the [`JobField`] discriminant used by the
//! synonym table, and the mutually exclusive [`ParseResult`].

use serde::{Deserialize, Serialize};

/// A sparse job record produced by the parser and used to pre-fill the
/// job-creation form.
///
/// Every field is optional. The form decides which blanks the dispatcher must
/// fill in by hand. `contractor_name`, `driver_name` and `vehicle_name` are
/// opaque hints, never validated references; see the `dispatch-lookup` crate
/// for resolving them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialJobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// `YYYY-MM-DD`, local to the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<String>,
    /// `HH:MM`, 24-hour, local to the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_note: Option<String>,
    /// Canonical display name, or `""` when the pasted type was not recognised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_email: Option<String>,
    /// Newline-joined remarks. Flight details, when present, come first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_services: Vec<ExtraService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
}

impl PartialJobRecord {
    /// Mutable access to the slot backing a single-valued [`JobField`].
    pub fn slot_mut(&mut self, field: JobField) -> &mut Option<String> {
        match field {
            JobField::CustomerName => &mut self.customer_name,
            JobField::CustomerMobile => &mut self.customer_mobile,
            JobField::CustomerEmail => &mut self.customer_email,
            JobField::BookingRef => &mut self.booking_ref,
            JobField::ServiceType => &mut self.service_type,
            JobField::PickupDate => &mut self.pickup_date,
            JobField::PickupTime => &mut self.pickup_time,
            JobField::PickupLocation => &mut self.pickup_location,
            JobField::DropoffLocation => &mut self.dropoff_location,
            JobField::PickupNote => &mut self.pickup_note,
            JobField::DropoffNote => &mut self.dropoff_note,
            JobField::VehicleType => &mut self.vehicle_type,
            JobField::PassengerName => &mut self.passenger_name,
            JobField::PassengerMobile => &mut self.passenger_mobile,
            JobField::PassengerEmail => &mut self.passenger_email,
            JobField::ContractorName => &mut self.contractor_name,
            JobField::DriverName => &mut self.driver_name,
            JobField::VehicleName => &mut self.vehicle_name,
        }
    }

    /// Read-only counterpart of [`slot_mut`](Self::slot_mut).
    pub fn get(&self, field: JobField) -> Option<&str> {
        let value = match field {
            JobField::CustomerName => &self.customer_name,
            JobField::CustomerMobile => &self.customer_mobile,
            JobField::CustomerEmail => &self.customer_email,
            JobField::BookingRef => &self.booking_ref,
            JobField::ServiceType => &self.service_type,
            JobField::PickupDate => &self.pickup_date,
            JobField::PickupTime => &self.pickup_time,
            JobField::PickupLocation => &self.pickup_location,
            JobField::DropoffLocation => &self.dropoff_location,
            JobField::PickupNote => &self.pickup_note,
            JobField::DropoffNote => &self.dropoff_note,
            JobField::VehicleType => &self.vehicle_type,
            JobField::PassengerName => &self.passenger_name,
            JobField::PassengerMobile => &self.passenger_mobile,
            JobField::PassengerEmail => &self.passenger_email,
            JobField::ContractorName => &self.contractor_name,
            JobField::DriverName => &self.driver_name,
            JobField::VehicleName => &self.vehicle_name,
        };
        value.as_deref()
    }
}

/// An extra service line item. The parser always prices these at zero; the
/// dispatcher sets the real price in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraService {
    pub description: String,
    pub price: f64,
}

impl ExtraService {
    pub fn unpriced(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            price: 0.0,
        }
    }
}

/// Single-valued job fields that a synonym can target.
///
/// `remarks` and `extra_services` are assembled by the parser itself and are
/// deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    CustomerName,
    CustomerMobile,
    CustomerEmail,
    BookingRef,
    ServiceType,
    PickupDate,
    PickupTime,
    PickupLocation,
    DropoffLocation,
    PickupNote,
    DropoffNote,
    VehicleType,
    PassengerName,
    PassengerMobile,
    PassengerEmail,
    ContractorName,
    DriverName,
    VehicleName,
}

impl std::fmt::Display for JobField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobField::CustomerName => "customer_name",
            JobField::CustomerMobile => "customer_mobile",
            JobField::CustomerEmail => "customer_email",
            JobField::BookingRef => "booking_ref",
            JobField::ServiceType => "service_type",
            JobField::PickupDate => "pickup_date",
            JobField::PickupTime => "pickup_time",
            JobField::PickupLocation => "pickup_location",
            JobField::DropoffLocation => "dropoff_location",
            JobField::PickupNote => "pickup_note",
            JobField::DropoffNote => "dropoff_note",
            JobField::VehicleType => "vehicle_type",
            JobField::PassengerName => "passenger_name",
            JobField::PassengerMobile => "passenger_mobile",
            JobField::PassengerEmail => "passenger_email",
            JobField::ContractorName => "contractor_name",
            JobField::DriverName => "driver_name",
            JobField::VehicleName => "vehicle_name",
        };
        f.write_str(name)
    }
}

/// Outcome of one parse call: either the record or the errors, never both.
///
/// Serialises as `{"data": {...}}` or `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseResult {
    Data(PartialJobRecord),
    Errors(Vec<String>),
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResult::Data(_))
    }

    pub fn data(&self) -> Option<&PartialJobRecord> {
        match self {
            ParseResult::Data(record) => Some(record),
            ParseResult::Errors(_) => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ParseResult::Data(_) => &[],
            ParseResult::Errors(errors) => errors,
        }
    }

    pub fn into_data(self) -> Option<PartialJobRecord> {
        match self {
            ParseResult::Data(record) => Some(record),
            ParseResult::Errors(_) => None,
        }
    }
}
