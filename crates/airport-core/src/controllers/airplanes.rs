//! Airplane list and detail views.

use super::{view::TableView, AirplaneSort, AppContext};
use crate::{
    models::{Airplane, Id, NewAirplane},
    routes::Route,
};

/// `/airplanes`: the fleet plus the creation form.
pub struct AirplanesController {
    ctx: AppContext,
    pub airplanes: Vec<Airplane>,
    pub view: TableView<AirplaneSort>,
    pub draft: NewAirplane,
}

impl AirplanesController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            airplanes: Vec::new(),
            view: TableView::default(),
            draft: NewAirplane::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        self.ctx.refresh(&mut self.airplanes).await
    }

    pub fn visible(&self) -> Vec<&Airplane> {
        self.view.apply(&self.airplanes)
    }

    pub async fn create(&mut self) -> Option<Airplane> {
        let created = self.ctx.create::<Airplane>(&self.draft).await?;
        self.draft = NewAirplane::default();
        self.load().await;
        Some(created)
    }

    pub async fn delete(&mut self, id: Id) -> bool {
        let deleted = self.ctx.delete::<Airplane>(id).await;
        if deleted {
            self.load().await;
        }
        deleted
    }

    pub fn go_to_detail(&self, id: Id) {
        self.ctx.navigate(Route::Airplane(id));
    }
}

/// `/airplane/{id}`
pub struct AirplaneDetailController {
    ctx: AppContext,
    id: Id,
    pub airplane: Option<Airplane>,
}

impl AirplaneDetailController {
    pub fn new(ctx: AppContext, id: Id) -> Self {
        Self {
            ctx,
            id,
            airplane: None,
        }
    }

    pub async fn load(&mut self) -> bool {
        match self.ctx.fetch::<Airplane>(self.id).await {
            Some(airplane) => {
                self.airplane = Some(airplane);
                true
            }
            None => false,
        }
    }

    pub async fn update(&mut self) -> bool {
        let Some(airplane) = self.airplane.clone() else {
            return false;
        };
        let updated = self.ctx.update(&airplane).await;
        if updated {
            self.load().await;
        }
        updated
    }

    pub async fn delete(&mut self) -> bool {
        let deleted = self.ctx.delete::<Airplane>(self.id).await;
        if deleted {
            self.ctx.navigate(Route::Airplanes);
        }
        deleted
    }
}
