//! Core library for the airport back office client.
//!
//! This crate talks to the back office REST API managing stewards, flights,
//! airplanes and destinations, and holds the view-model state shown by the
//! CLI.
//!
//! # Architecture
//!
//! - **Transport** ([`transport`]): one HTTP exchange per call, behind a trait
//!   so tests can substitute an in-memory server
//! - **Client** ([`client`]): typed CRUD adapters and relationship queries,
//!   server error classification
//! - **Controllers** ([`controllers`]): per-view state and actions, reporting
//!   into shared [`Alerts`] and navigating through a shared [`Location`]
//! - **Display** ([`display`]): markdown rendering of entities, tables and
//!   alerts, flight times in the configured time zone
//!
//! Smaller pieces: [`messages`] maps failures to alert texts, [`coerce`]
//! converts form strings to integers, [`picker`] binds instants to a calendar
//! widget and [`routes`] resolves URL fragments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use airport_core::{controllers::DestinationsController, ApiClientBuilder, AppContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClientBuilder::new()
//!     .with_api_url(Some("http://localhost:8080/pa165/api"))
//!     .build()?;
//! let ctx = AppContext::new(api);
//!
//! let mut destinations = DestinationsController::new(ctx.clone());
//! destinations.load().await;
//! for destination in destinations.visible() {
//!     println!("{}, {}", destination.city, destination.country);
//! }
//!
//! if let Some(error) = ctx.alerts.snapshot().error {
//!     eprintln!("{error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod alerts;
pub mod client;
pub mod coerce;
pub mod config;
pub mod controllers;
pub mod display;
pub mod error;
pub mod messages;
pub mod models;
pub mod picker;
pub mod routes;
pub mod transport;

// Re-export commonly used types
pub use alerts::{AlertSlots, Alerts};
pub use client::{ApiClient, ApiClientBuilder, Resources};
pub use config::ClientConfig;
pub use controllers::AppContext;
pub use display::{AlertBanner, FlightTime, Table};
pub use error::{ClientError, Result, ServerError};
pub use messages::{describe_failure, map_error, Operation};
pub use models::{
    Airplane, Destination, EntityKind, ErrorCode, Flight, Id, NewAirplane, NewDestination,
    NewFlight, NewSteward, Resource, Steward,
};
pub use routes::{Location, Route};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
