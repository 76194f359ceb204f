//! Command handlers: drive a controller, then render its view and the alerts.

use airport_core::{
    controllers::{
        AirplaneDetailController, AirplanesController, DashboardController,
        DestinationDetailController, DestinationsController, FlightDetailController,
        FlightForm, FlightsController, StewardDetailController, StewardsController,
    },
    display::FlightDetail,
    describe_failure, AppContext, ClientError, EntityKind, Flight, Id, NewAirplane, Operation, Route,
    Table,
};
use anyhow::Result;
use jiff::tz::TimeZone;
use log::debug;

use crate::{
    cli::{parse_id, AirplaneCommands, DestinationCommands, FlightCommands, StewardCommands},
    renderer::TerminalRenderer,
};

pub struct App {
    ctx: AppContext,
    renderer: TerminalRenderer,
    tz: TimeZone,
}

impl App {
    pub fn new(ctx: AppContext, renderer: TerminalRenderer, tz: TimeZone) -> Self {
        Self { ctx, renderer, tz }
    }

    /// Keeps a valid input; reports an invalid one.
    fn check<T>(&self, operation: Operation, result: Result<T, ClientError>) -> Option<T> {
        result
            .map_err(|e| self.ctx.alerts.error(describe_failure(operation, &e)))
            .ok()
    }

    /// Renders the alerts followed by the view.
    fn finish(&self, view: &str) -> Result<()> {
        self.renderer.render_alerts(&self.ctx.alerts.snapshot())?;
        if !view.is_empty() {
            self.renderer.render(view)?;
        }
        Ok(())
    }

    fn flights_table(&self, flights: &[Flight]) -> String {
        Table::from(flights).in_zone(self.tz.clone()).to_string()
    }

    /// Loads and renders the view behind `route`.
    pub async fn open(&self, route: Route) -> Result<()> {
        debug!("Opening {route}");
        self.ctx.navigate(route);
        let view = match route {
            Route::Main => {
                let mut dashboard = DashboardController::new(self.ctx.clone());
                dashboard.load().await;
                format!(
                    "# Flights in the air\n\n{}",
                    self.flights_table(&dashboard.flights)
                )
            }
            Route::Stewards => {
                let mut stewards = StewardsController::new(self.ctx.clone());
                stewards.load().await;
                stewards_view(&stewards)
            }
            Route::Steward(id) => {
                let mut detail = StewardDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                self.steward_view(&detail)
            }
            Route::Flights => {
                let mut flights = FlightsController::new(self.ctx.clone());
                flights.load().await;
                self.flights_view(&flights)
            }
            Route::Flight(id) => {
                let mut detail = FlightDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                self.flight_view(&detail)
            }
            Route::Airplanes => {
                let mut airplanes = AirplanesController::new(self.ctx.clone());
                airplanes.load().await;
                airplanes_view(&airplanes)
            }
            Route::Airplane(id) => {
                let mut detail = AirplaneDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                airplane_view(&detail)
            }
            Route::Destinations => {
                let mut destinations = DestinationsController::new(self.ctx.clone());
                destinations.load().await;
                destinations_view(&destinations)
            }
            Route::Destination(id) => {
                let mut detail = DestinationDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                self.destination_view(&detail)
            }
        };
        self.finish(&view)
    }

    /// Opens wherever the last action navigated to.
    async fn open_current(&self) -> Result<()> {
        self.open(self.ctx.location.path()).await
    }

    fn id(&self, operation: Operation, raw: &str) -> Option<Id> {
        self.check(operation, parse_id("id", raw))
    }

    pub async fn handle_steward_command(&self, command: StewardCommands) -> Result<()> {
        const KIND: EntityKind = EntityKind::Steward;
        match command {
            StewardCommands::List(args) => {
                let mut stewards = StewardsController::new(self.ctx.clone());
                args.table.apply(args.sort, &mut stewards.view);
                stewards.load().await;
                self.finish(&stewards_view(&stewards))
            }
            StewardCommands::Show(args) => match self.id(Operation::load(KIND), &args.id) {
                Some(id) => self.open(Route::Steward(id)).await,
                None => self.finish(""),
            },
            StewardCommands::Create(args) => {
                let mut stewards = StewardsController::new(self.ctx.clone());
                stewards.draft = args.into();
                match stewards.create().await {
                    Some(created) => {
                        stewards.go_to_detail(created.id);
                        self.open_current().await
                    }
                    None => self.finish(""),
                }
            }
            StewardCommands::Update(args) => {
                let Some(id) = self.id(Operation::update(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut detail = StewardDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                detail.save_draft();
                if let Some(steward) = detail.steward.as_mut() {
                    args.apply(steward);
                    if !detail.update().await {
                        detail.restore_draft();
                    }
                }
                self.finish(&self.steward_view(&detail))
            }
            StewardCommands::Delete(args) => {
                let Some(id) = self.id(Operation::delete(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut stewards = StewardsController::new(self.ctx.clone());
                stewards.load().await;
                stewards.delete(id).await;
                self.finish(&stewards_view(&stewards))
            }
        }
    }

    pub async fn handle_flight_command(&self, command: FlightCommands) -> Result<()> {
        const KIND: EntityKind = EntityKind::Flight;
        match command {
            FlightCommands::List(args) => {
                let mut flights = FlightsController::new(self.ctx.clone());
                args.table.apply(args.sort, &mut flights.view);
                flights.load().await;
                self.finish(&self.flights_view(&flights))
            }
            FlightCommands::Show(args) => match self.id(Operation::load(KIND), &args.id) {
                Some(id) => self.open(Route::Flight(id)).await,
                None => self.finish(""),
            },
            FlightCommands::Create(args) => {
                let Some(form) = self.check(Operation::create(KIND), FlightForm::try_from(args))
                else {
                    return self.finish("");
                };
                let mut flights = FlightsController::new(self.ctx.clone());
                flights.form = form;
                match flights.create().await {
                    Some(created) => {
                        flights.go_to_detail(created.id);
                        self.open_current().await
                    }
                    None => self.finish(""),
                }
            }
            FlightCommands::Update(args) => {
                let operation = Operation::update(KIND);
                let Some(id) = self.id(operation, &args.id) else {
                    return self.finish("");
                };
                let mut detail = FlightDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                if let Some(mut edited) = detail.flight.clone() {
                    if self.check(operation, args.apply(&mut edited)).is_some() {
                        detail.flight = Some(edited);
                        detail.update().await;
                    }
                }
                self.finish(&self.flight_view(&detail))
            }
            FlightCommands::Delete(args) => {
                let Some(id) = self.id(Operation::delete(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut flights = FlightsController::new(self.ctx.clone());
                flights.load().await;
                flights.delete(id).await;
                self.finish(&self.flights_view(&flights))
            }
        }
    }

    pub async fn handle_airplane_command(&self, command: AirplaneCommands) -> Result<()> {
        const KIND: EntityKind = EntityKind::Airplane;
        match command {
            AirplaneCommands::List(args) => {
                let mut airplanes = AirplanesController::new(self.ctx.clone());
                args.table.apply(args.sort, &mut airplanes.view);
                airplanes.load().await;
                self.finish(&airplanes_view(&airplanes))
            }
            AirplaneCommands::Show(args) => match self.id(Operation::load(KIND), &args.id) {
                Some(id) => self.open(Route::Airplane(id)).await,
                None => self.finish(""),
            },
            AirplaneCommands::Create(args) => {
                let Some(draft) = self.check(Operation::create(KIND), NewAirplane::try_from(args)) else {
                    return self.finish("");
                };
                let mut airplanes = AirplanesController::new(self.ctx.clone());
                airplanes.draft = draft;
                match airplanes.create().await {
                    Some(created) => {
                        airplanes.go_to_detail(created.id);
                        self.open_current().await
                    }
                    None => self.finish(""),
                }
            }
            AirplaneCommands::Update(args) => {
                let operation = Operation::update(KIND);
                let Some(id) = self.id(operation, &args.id) else {
                    return self.finish("");
                };
                let mut detail = AirplaneDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                if let Some(mut edited) = detail.airplane.clone() {
                    if self.check(operation, args.apply(&mut edited)).is_some() {
                        detail.airplane = Some(edited);
                        detail.update().await;
                    }
                }
                self.finish(&airplane_view(&detail))
            }
            AirplaneCommands::Delete(args) => {
                let Some(id) = self.id(Operation::delete(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut airplanes = AirplanesController::new(self.ctx.clone());
                airplanes.load().await;
                airplanes.delete(id).await;
                self.finish(&airplanes_view(&airplanes))
            }
        }
    }

    pub async fn handle_destination_command(&self, command: DestinationCommands) -> Result<()> {
        const KIND: EntityKind = EntityKind::Destination;
        match command {
            DestinationCommands::List(args) => {
                let mut destinations = DestinationsController::new(self.ctx.clone());
                args.table.apply(args.sort, &mut destinations.view);
                destinations.load().await;
                self.finish(&destinations_view(&destinations))
            }
            DestinationCommands::Show(args) => match self.id(Operation::load(KIND), &args.id) {
                Some(id) => self.open(Route::Destination(id)).await,
                None => self.finish(""),
            },
            DestinationCommands::Create(args) => {
                let mut destinations = DestinationsController::new(self.ctx.clone());
                destinations.draft = args.into();
                match destinations.create().await {
                    Some(created) => {
                        destinations.go_to_detail(created.id);
                        self.open_current().await
                    }
                    None => self.finish(""),
                }
            }
            DestinationCommands::Update(args) => {
                let Some(id) = self.id(Operation::update(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut detail = DestinationDetailController::new(self.ctx.clone(), id);
                detail.load().await;
                detail.save_draft();
                if let Some(destination) = detail.destination.as_mut() {
                    args.apply(destination);
                    if !detail.update().await {
                        detail.restore_draft();
                    }
                }
                self.finish(&self.destination_view(&detail))
            }
            DestinationCommands::Delete(args) => {
                let Some(id) = self.id(Operation::delete(KIND), &args.id) else {
                    return self.finish("");
                };
                let mut destinations = DestinationsController::new(self.ctx.clone());
                destinations.load().await;
                destinations.delete(id).await;
                self.finish(&destinations_view(&destinations))
            }
        }
    }

    fn steward_view(&self, detail: &StewardDetailController) -> String {
        match &detail.steward {
            Some(steward) => format!(
                "{steward}\n## Flights\n\n{}",
                self.flights_table(&detail.flights)
            ),
            None => String::new(),
        }
    }

    fn flights_view(&self, flights: &FlightsController) -> String {
        format!(
            "# Flights\n\n{}",
            Table::new(flights.visible()).in_zone(self.tz.clone())
        )
    }

    fn flight_view(&self, detail: &FlightDetailController) -> String {
        detail
            .flight
            .as_ref()
            .map(|flight| FlightDetail { flight, tz: &self.tz }.to_string())
            .unwrap_or_default()
    }

    fn destination_view(&self, detail: &DestinationDetailController) -> String {
        match &detail.destination {
            Some(destination) => format!(
                "{destination}\n## Incoming flights\n\n{}\n## Outgoing flights\n\n{}",
                self.flights_table(&detail.incoming),
                self.flights_table(&detail.outgoing)
            ),
            None => String::new(),
        }
    }
}

fn stewards_view(stewards: &StewardsController) -> String {
    format!("# Stewards\n\n{}", Table::new(stewards.visible()))
}

fn airplanes_view(airplanes: &AirplanesController) -> String {
    format!("# Airplanes\n\n{}", Table::new(airplanes.visible()))
}

fn airplane_view(detail: &AirplaneDetailController) -> String {
    detail
        .airplane
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn destinations_view(destinations: &DestinationsController) -> String {
    format!("# Destinations\n\n{}", Table::new(destinations.visible()))
}
