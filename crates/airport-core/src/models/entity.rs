//! Resource families and the trait tying an entity to its endpoints.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Server-assigned entity identifier.
pub type Id = u64;

/// The four resource families exposed by the back office API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Steward,
    Flight,
    Airplane,
    Destination,
}

impl EntityKind {
    /// Collection name, used both as the endpoint segment and as the key of
    /// the `_embedded` envelope.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Steward => "stewards",
            EntityKind::Flight => "flights",
            EntityKind::Airplane => "airplanes",
            EntityKind::Destination => "destinations",
        }
    }

    /// Lower-case singular name for use inside sentences.
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Steward => "steward",
            EntityKind::Flight => "flight",
            EntityKind::Airplane => "airplane",
            EntityKind::Destination => "destination",
        }
    }

    /// Capitalized singular name for the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Steward => "Steward",
            EntityKind::Flight => "Flight",
            EntityKind::Airplane => "Airplane",
            EntityKind::Destination => "Destination",
        }
    }

    /// Endpoint base path relative to the API root, e.g. `/stewards`.
    pub fn base_path(&self) -> String {
        format!("/{}", self.collection())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// An entity exchanged with the server through one endpoint family.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Representation submitted on creation, lacking the server-assigned id.
    type Draft: Serialize + Send + Sync;

    /// Resource family the entity belongs to.
    const KIND: EntityKind;

    /// Server-assigned identifier.
    fn id(&self) -> Id;
}
