//! Flight list and detail views.
//!
//! The list view also loads the airplanes, destinations and stewards the
//! creation form chooses from. Those fetches run concurrently and complete in
//! any order; each one fills its own collection or reports its own failure.

use jiff::Timestamp;

use super::{view::TableView, AppContext, FlightSort};
use crate::{
    error::{ClientError, Result},
    messages::{describe_failure, Operation},
    models::{Airplane, Destination, EntityKind, Flight, Id, NewFlight, Steward},
    picker::PickerOptions,
    routes::Route,
};

/// State of the flight creation form. Fields stay unset until the user picks
/// a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightForm {
    pub departure_location_id: Option<Id>,
    pub arrival_location_id: Option<Id>,
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub airplane_id: Option<Id>,
    pub steward_ids: Vec<Id>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| ClientError::invalid_input(field).with_reason("a value is required"))
}

impl FlightForm {
    /// Checks that every required field is set.
    pub fn to_new_flight(&self) -> Result<NewFlight> {
        Ok(NewFlight {
            departure_location_id: required(self.departure_location_id, "departureLocationId")?,
            arrival_location_id: required(self.arrival_location_id, "arrivalLocationId")?,
            departure_time: required(self.departure_time, "departureTime")?,
            arrival_time: required(self.arrival_time, "arrivalTime")?,
            airplane_id: required(self.airplane_id, "airplaneId")?,
            steward_ids: self.steward_ids.clone(),
        })
    }
}

/// `/flights`: the schedule plus the creation form.
pub struct FlightsController {
    ctx: AppContext,
    pub flights: Vec<Flight>,
    pub airplanes: Vec<Airplane>,
    pub destinations: Vec<Destination>,
    pub stewards: Vec<Steward>,
    pub view: TableView<FlightSort>,
    pub form: FlightForm,
    pub departure_options: PickerOptions,
    pub arrival_options: PickerOptions,
}

impl FlightsController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            flights: Vec::new(),
            airplanes: Vec::new(),
            destinations: Vec::new(),
            stewards: Vec::new(),
            view: TableView::default(),
            form: FlightForm::default(),
            departure_options: PickerOptions::departure(),
            arrival_options: PickerOptions::arrival(),
        }
    }

    /// Fetches the flights and every form choice list concurrently.
    pub async fn load(&mut self) {
        let ctx = self.ctx.clone();
        let flights = ctx.api.resources::<Flight>();
        let airplanes = ctx.api.resources::<Airplane>();
        let destinations = ctx.api.resources::<Destination>();
        let stewards = ctx.api.resources::<Steward>();

        let (flights, airplanes, destinations, stewards) = tokio::join!(
            flights.list(),
            airplanes.list(),
            destinations.list(),
            stewards.list()
        );

        if let Some(v) = ctx.settle(Operation::load(EntityKind::Flight), flights) {
            self.flights = v;
        }
        if let Some(v) = ctx.settle(Operation::load(EntityKind::Airplane), airplanes) {
            self.airplanes = v;
        }
        if let Some(v) = ctx.settle(Operation::load(EntityKind::Destination), destinations) {
            self.destinations = v;
        }
        if let Some(v) = ctx.settle(Operation::load(EntityKind::Steward), stewards) {
            self.stewards = v;
        }
    }

    pub fn visible(&self) -> Vec<&Flight> {
        self.view.apply(&self.flights)
    }

    /// Submits the form. An incomplete form is reported without contacting
    /// the server.
    pub async fn create(&mut self) -> Option<Flight> {
        let draft = match self.form.to_new_flight() {
            Ok(draft) => draft,
            Err(e) => {
                let operation = Operation::create(EntityKind::Flight);
                self.ctx.alerts.error(describe_failure(operation, &e));
                return None;
            }
        };

        let created = self.ctx.create::<Flight>(&draft).await?;
        self.form = FlightForm::default();
        self.ctx.refresh(&mut self.flights).await;
        Some(created)
    }

    pub async fn delete(&mut self, id: Id) -> bool {
        let deleted = self.ctx.delete::<Flight>(id).await;
        if deleted {
            self.ctx.refresh(&mut self.flights).await;
        }
        deleted
    }

    pub fn go_to_detail(&self, id: Id) {
        self.ctx.navigate(Route::Flight(id));
    }
}

/// `/flight/{id}`
pub struct FlightDetailController {
    ctx: AppContext,
    id: Id,
    pub flight: Option<Flight>,
}

impl FlightDetailController {
    pub fn new(ctx: AppContext, id: Id) -> Self {
        Self {
            ctx,
            id,
            flight: None,
        }
    }

    pub async fn load(&mut self) -> bool {
        match self.ctx.fetch::<Flight>(self.id).await {
            Some(flight) => {
                self.flight = Some(flight);
                true
            }
            None => false,
        }
    }

    pub async fn update(&mut self) -> bool {
        let Some(flight) = self.flight.clone() else {
            return false;
        };
        let updated = self.ctx.update(&flight).await;
        if updated {
            self.load().await;
        }
        updated
    }

    pub async fn delete(&mut self) -> bool {
        let deleted = self.ctx.delete::<Flight>(self.id).await;
        if deleted {
            self.ctx.navigate(Route::Flights);
        }
        deleted
    }
}
