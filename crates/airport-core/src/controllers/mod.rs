//! View-model controllers, one per route.
//!
//! Each controller owns the state of one view: the fetched collection(s), a
//! draft for its creation form and the table presentation state. Actions never
//! return errors; every failure is described once in the shared error slot
//! and the last successfully fetched data stays in place. Successful
//! mutations report into the success slot and re-fetch the affected
//! collection instead of patching it locally.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   View (CLI)    │    │   Controller    │    │    ApiClient    │
//! │ renders state,  │───▶│ state + actions │───▶│  Resources<R>   │
//! │ calls actions   │    │                 │    │                 │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 ▼
//!                          Alerts, Location
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use airport_core::{controllers::{AppContext, StewardsController}, ApiClientBuilder};
//!
//! # async fn example() -> Result<(), airport_core::ClientError> {
//! let ctx = AppContext::new(ApiClientBuilder::new().build()?);
//! let mut stewards = StewardsController::new(ctx.clone());
//! stewards.load().await;
//! stewards.delete(3).await;
//! println!("{:?}", ctx.alerts.snapshot());
//! # Ok(())
//! # }
//! ```

use crate::{
    alerts::Alerts,
    client::ApiClient,
    messages::{describe_failure, success_message, Operation},
    models::{Id, Resource},
    routes::{Location, Route},
};

pub mod airplanes;
pub mod dashboard;
pub mod destinations;
pub mod flights;
pub mod stewards;
pub mod view;

pub use airplanes::{AirplaneDetailController, AirplanesController};
pub use dashboard::DashboardController;
pub use destinations::{DestinationDetailController, DestinationsController};
pub use flights::{FlightDetailController, FlightForm, FlightsController};
pub use stewards::{StewardDetailController, StewardsController};
pub use view::{AirplaneSort, DestinationSort, FlightSort, Sortable, StewardSort, TableView};

/// Collaborators injected into every controller.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub alerts: Alerts,
    pub location: Location,
}

impl AppContext {
    /// Context with empty alerts, starting at [`Route::Main`].
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            alerts: Alerts::new(),
            location: Location::default(),
        }
    }

    /// Changes the current path.
    pub fn navigate(&self, route: Route) {
        self.location.set_path(route);
    }

    /// Keeps the value of a successful fetch; reports a failed one.
    pub(crate) fn settle<T>(&self, operation: Operation, result: crate::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.alerts.error(describe_failure(operation, &e));
                None
            }
        }
    }

    /// Replaces `items` with a fresh listing; on failure the previous listing
    /// stays.
    pub(crate) async fn refresh<R: Resource>(&self, items: &mut Vec<R>) -> bool {
        let result = self.api.resources::<R>().list().await;
        match self.settle(Operation::load(R::KIND), result) {
            Some(fresh) => {
                *items = fresh;
                true
            }
            None => false,
        }
    }

    pub(crate) async fn fetch<R: Resource>(&self, id: Id) -> Option<R> {
        let result = self.api.resources::<R>().get(id).await;
        self.settle(Operation::load(R::KIND), result)
    }

    pub(crate) async fn create<R: Resource>(&self, draft: &R::Draft) -> Option<R> {
        let operation = Operation::create(R::KIND);
        let result = self.api.resources::<R>().create(draft).await;
        let created = self.settle(operation, result)?;
        self.alerts.success(success_message(operation, created.id()));
        Some(created)
    }

    pub(crate) async fn update<R: Resource>(&self, entity: &R) -> bool {
        let operation = Operation::update(R::KIND);
        let result = self.api.resources::<R>().update(entity.id(), entity).await;
        let updated = self.settle(operation, result).is_some();
        if updated {
            self.alerts.success(success_message(operation, entity.id()));
        }
        updated
    }

    pub(crate) async fn delete<R: Resource>(&self, id: Id) -> bool {
        let operation = Operation::delete(R::KIND);
        let result = self.api.resources::<R>().delete(id).await;
        let deleted = self.settle(operation, result).is_some();
        if deleted {
            self.alerts.success(success_message(operation, id));
        }
        deleted
    }
}
