//! Destination list and detail views.

use super::{view::TableView, AppContext, DestinationSort};
use crate::{
    messages::Operation,
    models::{Destination, EntityKind, Flight, Id, NewDestination},
    routes::Route,
};

/// `/destinations`: all destinations plus the creation form, sorted by
/// country unless the user picks another column.
pub struct DestinationsController {
    ctx: AppContext,
    pub destinations: Vec<Destination>,
    pub view: TableView<DestinationSort>,
    pub draft: NewDestination,
}

impl DestinationsController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            destinations: Vec::new(),
            view: TableView::default(),
            draft: NewDestination::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        self.ctx.refresh(&mut self.destinations).await
    }

    pub fn visible(&self) -> Vec<&Destination> {
        self.view.apply(&self.destinations)
    }

    pub async fn create(&mut self) -> Option<Destination> {
        let created = self.ctx.create::<Destination>(&self.draft).await?;
        self.draft = NewDestination::default();
        self.load().await;
        Some(created)
    }

    pub async fn delete(&mut self, id: Id) -> bool {
        let deleted = self.ctx.delete::<Destination>(id).await;
        if deleted {
            self.load().await;
        }
        deleted
    }

    pub fn go_to_detail(&self, id: Id) {
        self.ctx.navigate(Route::Destination(id));
    }
}

/// `/destinations/{id}`: one destination with its arriving and departing
/// flights.
pub struct DestinationDetailController {
    ctx: AppContext,
    id: Id,
    pub destination: Option<Destination>,
    pub incoming: Vec<Flight>,
    pub outgoing: Vec<Flight>,
    saved: Option<NewDestination>,
}

impl DestinationDetailController {
    pub fn new(ctx: AppContext, id: Id) -> Self {
        Self {
            ctx,
            id,
            destination: None,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            saved: None,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Fetches the destination and both flight lists concurrently; every
    /// result is applied as it stands.
    pub async fn load(&mut self) {
        let api = &self.ctx.api;
        let destinations = api.resources::<Destination>();
        let (destination, incoming, outgoing) = tokio::join!(
            destinations.get(self.id),
            api.incoming_flights(self.id),
            api.outgoing_flights(self.id)
        );

        let flights = Operation::load(EntityKind::Flight);
        if let Some(destination) = self
            .ctx
            .settle(Operation::load(EntityKind::Destination), destination)
        {
            self.destination = Some(destination);
        }
        if let Some(incoming) = self.ctx.settle(flights, incoming) {
            self.incoming = incoming;
        }
        if let Some(outgoing) = self.ctx.settle(flights, outgoing) {
            self.outgoing = outgoing;
        }
    }

    /// Remembers the current country and city so an edit can be abandoned.
    pub fn save_draft(&mut self) {
        self.saved = self.destination.as_ref().map(NewDestination::from);
    }

    pub fn restore_draft(&mut self) {
        if let (Some(destination), Some(saved)) = (self.destination.as_mut(), self.saved.take()) {
            destination.country = saved.country;
            destination.city = saved.city;
        }
    }

    pub async fn update(&mut self) -> bool {
        let Some(destination) = self.destination.clone() else {
            return false;
        };
        let updated = self.ctx.update(&destination).await;
        if updated {
            self.saved = None;
            self.load().await;
        }
        updated
    }

    pub async fn delete(&mut self) -> bool {
        let deleted = self.ctx.delete::<Destination>(self.id).await;
        if deleted {
            self.ctx.navigate(Route::Destinations);
        }
        deleted
    }
}
