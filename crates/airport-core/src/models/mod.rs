//! Data models exchanged with the back office REST API.
//!
//! Entities are plain records: the client never persists them and holds only
//! transient, re-fetchable copies whose sole identity is the server-assigned
//! id. Each entity comes with a draft type lacking the id, used for creation
//! requests.
//!
//! Display implementations for these models live in [`crate::display::models`]
//! so that data structures stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use airport_core::models::{EntityKind, Resource, Steward};
//!
//! let steward: Steward =
//!     serde_json::from_str(r#"{"id": 3, "firstName": "Karel", "surname": "Novak"}"#).unwrap();
//! assert_eq!(steward.id(), 3);
//! assert_eq!(Steward::KIND, EntityKind::Steward);
//! assert_eq!(Steward::KIND.collection(), "stewards");
//! ```

pub mod airplane;
pub mod destination;
pub mod entity;
pub mod error_code;
pub mod flight;
pub mod steward;


pub use airplane::{Airplane, NewAirplane};
pub use destination::{Destination, NewDestination};
pub use entity::{EntityKind, Id, Resource};
pub use error_code::{ErrorBody, ErrorCode};
pub use flight::{Flight, NewFlight};
pub use steward::{NewSteward, Steward};
