//! Flight model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Resource};

/// A scheduled flight between two destinations.
///
/// Departure and arrival are kept as instants; formatting for display goes
/// through [`crate::display::FlightTime`] and never replaces them.
///
/// On the wire both are RFC 3339 strings carrying an offset, e.g.
/// `2023-05-01T10:00:00Z`. A value without an offset fails to deserialize and
/// the whole response is reported as a serialization error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Id,
    pub departure_location_id: Id,
    pub arrival_location_id: Id,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub airplane_id: Id,
    #[serde(default)]
    pub steward_ids: Vec<Id>,
}

/// Flight creation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub departure_location_id: Id,
    pub arrival_location_id: Id,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub airplane_id: Id,
    pub steward_ids: Vec<Id>,
}

impl Resource for Flight {
    type Draft = NewFlight;
    const KIND: EntityKind = EntityKind::Flight;

    fn id(&self) -> Id {
        self.id
    }
}
