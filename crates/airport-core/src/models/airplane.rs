//! Airplane model definition.

use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Resource};

/// An aircraft of the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airplane {
    pub id: Id,
    pub name: String,
    /// Aircraft type designation (`type` on the wire)
    #[serde(rename = "type")]
    pub airplane_type: String,
    /// Passenger capacity
    pub capacity: u32,
}

/// Airplane creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAirplane {
    pub name: String,
    #[serde(rename = "type")]
    pub airplane_type: String,
    pub capacity: u32,
}

impl Resource for Airplane {
    type Draft = NewAirplane;
    const KIND: EntityKind = EntityKind::Airplane;

    fn id(&self) -> Id {
        self.id
    }
}
