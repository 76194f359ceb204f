//! `/main`: flights currently in the air.

use super::AppContext;
use crate::{
    messages::Operation,
    models::{EntityKind, Flight, Id},
    routes::Route,
};

pub struct DashboardController {
    ctx: AppContext,
    pub flights: Vec<Flight>,
}

impl DashboardController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            flights: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        let result = self.ctx.api.current_flights().await;
        match self.ctx.settle(Operation::load(EntityKind::Flight), result) {
            Some(flights) => {
                self.flights = flights;
                true
            }
            None => false,
        }
    }

    pub fn go_to_flight(&self, id: Id) {
        self.ctx.navigate(Route::Flight(id));
    }
}
