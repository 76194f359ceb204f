//! Display formatting for views.
//!
//! Domain models implement [`std::fmt::Display`] as markdown detail blocks,
//! collections render through [`Table`], and the alert slots through
//! [`AlertBanner`]. All output is markdown so the CLI renderer can style it.
//!
//! ## Module Organization
//!
//! - [`collections`]: Markdown tables ([`Table`], [`TableRow`])
//! - [`datetime`]: Flight time formatting ([`FlightTime`], [`format_instant`])
//! - [`models`]: Display implementations for entities
//! - [`status`]: Alert banner
//!
//! ## Usage Examples
//!
//! ```rust
//! use airport_core::{display::FlightTime, models::Flight};
//!
//! let flight: Flight = serde_json::from_str(
//!     r#"{"id": 1, "departureLocationId": 1, "arrivalLocationId": 2,
//!         "departureTime": "2023-05-01T10:00:00Z", "arrivalTime": "2023-05-01T14:30:00Z",
//!         "airplaneId": 1, "stewardIds": []}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(FlightTime::new(&flight.departure_time).to_string(), "01.05.2023 - 10:00 AM");
//! assert_eq!(FlightTime::new(&flight.arrival_time).to_string(), "01.05.2023 - 2:30 PM");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Table, TableRow};
pub use datetime::{format_instant, format_instant_in, FlightTime};
pub use models::FlightDetail;
pub use status::AlertBanner;
