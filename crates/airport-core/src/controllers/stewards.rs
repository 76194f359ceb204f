//! Steward list and detail views.

use super::{view::TableView, AppContext, StewardSort};
use crate::{
    messages::Operation,
    models::{EntityKind, Flight, Id, NewSteward, Steward},
    routes::Route,
};

/// `/stewards`: all stewards plus the creation form.
pub struct StewardsController {
    ctx: AppContext,
    pub stewards: Vec<Steward>,
    pub view: TableView<StewardSort>,
    pub draft: NewSteward,
}

impl StewardsController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            stewards: Vec::new(),
            view: TableView::default(),
            draft: NewSteward::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        self.ctx.refresh(&mut self.stewards).await
    }

    /// Rows in display order.
    pub fn visible(&self) -> Vec<&Steward> {
        self.view.apply(&self.stewards)
    }

    /// Submits the draft; on success the form is reset and the list re-fetched.
    pub async fn create(&mut self) -> Option<Steward> {
        let created = self.ctx.create::<Steward>(&self.draft).await?;
        self.draft = NewSteward::default();
        self.load().await;
        Some(created)
    }

    /// Deletes a steward; the list is re-fetched only on success.
    pub async fn delete(&mut self, id: Id) -> bool {
        let deleted = self.ctx.delete::<Steward>(id).await;
        if deleted {
            self.load().await;
        }
        deleted
    }

    pub fn go_to_detail(&self, id: Id) {
        self.ctx.navigate(Route::Steward(id));
    }
}

/// `/steward/{id}`: one steward with the flights they crew.
pub struct StewardDetailController {
    ctx: AppContext,
    id: Id,
    pub steward: Option<Steward>,
    pub flights: Vec<Flight>,
    saved: Option<NewSteward>,
}

impl StewardDetailController {
    pub fn new(ctx: AppContext, id: Id) -> Self {
        Self {
            ctx,
            id,
            steward: None,
            flights: Vec::new(),
            saved: None,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Fetches the steward and their flights concurrently. Each result is
    /// applied on its own, so one failing does not discard the other.
    pub async fn load(&mut self) {
        let stewards = self.ctx.api.resources::<Steward>();
        let (steward, flights) =
            tokio::join!(stewards.get(self.id), self.ctx.api.steward_flights(self.id));

        let operation = Operation::load(EntityKind::Steward);
        if let Some(steward) = self.ctx.settle(operation, steward) {
            self.steward = Some(steward);
        }
        if let Some(flights) = self.ctx.settle(Operation::load(EntityKind::Flight), flights) {
            self.flights = flights;
        }
    }

    /// Remembers the current names so an edit can be abandoned.
    pub fn save_draft(&mut self) {
        self.saved = self.steward.as_ref().map(|s| NewSteward {
            first_name: s.first_name.clone(),
            surname: s.surname.clone(),
        });
    }

    /// Puts back the names remembered by [`Self::save_draft`].
    pub fn restore_draft(&mut self) {
        if let (Some(steward), Some(saved)) = (self.steward.as_mut(), self.saved.take()) {
            steward.first_name = saved.first_name;
            steward.surname = saved.surname;
        }
    }

    /// Sends the edited steward and re-fetches the view on success.
    pub async fn update(&mut self) -> bool {
        let Some(steward) = self.steward.clone() else {
            return false;
        };
        let updated = self.ctx.update(&steward).await;
        if updated {
            self.saved = None;
            self.load().await;
        }
        updated
    }

    pub async fn delete(&mut self) -> bool {
        let deleted = self.ctx.delete::<Steward>(self.id).await;
        if deleted {
            self.ctx.navigate(Route::Stewards);
        }
        deleted
    }
}
