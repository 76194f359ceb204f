//! Destination model definition.

use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Resource};

/// An airport location flights depart from or arrive at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub id: Id,
    pub country: String,
    pub city: String,
}

/// Destination creation form, also used as the edit snapshot on the detail
/// view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDestination {
    pub country: String,
    pub city: String,
}

impl From<&Destination> for NewDestination {
    fn from(destination: &Destination) -> Self {
        Self {
            country: destination.country.clone(),
            city: destination.city.clone(),
        }
    }
}

impl Resource for Destination {
    type Draft = NewDestination;
    const KIND: EntityKind = EntityKind::Destination;

    fn id(&self) -> Id {
        self.id
    }
}
