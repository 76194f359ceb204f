//! Steward model definition.

use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Resource};

/// A cabin crew member assignable to flights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Steward {
    pub id: Id,
    pub first_name: String,
    pub surname: String,
}

/// Steward creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewSteward {
    pub first_name: String,
    pub surname: String,
}

impl Steward {
    /// First name and surname separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

impl Resource for Steward {
    type Draft = NewSteward;
    const KIND: EntityKind = EntityKind::Steward;

    fn id(&self) -> Id {
        self.id
    }
}
