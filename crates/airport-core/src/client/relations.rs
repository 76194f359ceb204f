//! Relationship sub-resources returning flights.

use super::{envelope::unwrap_collection, ApiClient};
use crate::{
    error::Result,
    models::{EntityKind, Flight, Id},
    transport::ApiRequest,
};

impl ApiClient {
    async fn flights_at(&self, path: String) -> Result<Vec<Flight>> {
        let body = self.execute(ApiRequest::get(path)).await?;
        unwrap_collection(&body, EntityKind::Flight.collection())
    }

    /// Flights currently in the air (`/flights/current`).
    pub async fn current_flights(&self) -> Result<Vec<Flight>> {
        self.flights_at(format!("{}/current", EntityKind::Flight.base_path()))
            .await
    }

    /// Flights the steward is assigned to as crew.
    pub async fn steward_flights(&self, steward_id: Id) -> Result<Vec<Flight>> {
        self.flights_at(format!(
            "{}/{steward_id}/flights",
            EntityKind::Steward.base_path()
        ))
        .await
    }

    /// Flights arriving at the destination.
    pub async fn incoming_flights(&self, destination_id: Id) -> Result<Vec<Flight>> {
        self.flights_at(format!(
            "{}/{destination_id}/incomingFlights",
            EntityKind::Destination.base_path()
        ))
        .await
    }

    /// Flights departing from the destination.
    pub async fn outgoing_flights(&self, destination_id: Id) -> Result<Vec<Flight>> {
        self.flights_at(format!(
            "{}/{destination_id}/outgoingFlights",
            EntityKind::Destination.base_path()
        ))
        .await
    }
}
