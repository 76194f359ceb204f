//! Command-line argument structures.
//!
//! Every command gets a clap `Args` struct that converts into the core type
//! it drives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core drafts / view state → Controllers
//! ```
//!
//! Numeric values (ids, capacity) are taken as text and parsed through the
//! core field adapters, so a malformed number is reported the same way as a
//! rejected form field.

use airport_core::{
    coerce::{FieldAdapter, IntField, IntListField},
    controllers::{AirplaneSort, DestinationSort, FlightForm, FlightSort, StewardSort, TableView},
    models::{Airplane, Destination, Flight, Id, NewAirplane, NewDestination, NewSteward, Steward},
    ClientError,
};
use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;

pub(crate) fn parse_id(field: &'static str, raw: &str) -> Result<Id, ClientError> {
    IntField::<Id>::new(field).parse(&raw.to_string())
}

fn parse_optional_id(field: &'static str, raw: Option<&String>) -> Result<Option<Id>, ClientError> {
    raw.map(|raw| parse_id(field, raw)).transpose()
}

/// Identifies one entity
#[derive(Args)]
pub struct IdArgs {
    /// Entity id
    pub id: String,
}

/// Options shared by all list commands
#[derive(Args)]
pub struct TableArgs {
    /// Sort in descending order
    #[arg(long)]
    pub reverse: bool,
    /// Show only rows containing this text
    #[arg(long)]
    pub search: Option<String>,
}

impl TableArgs {
    /// Applies the options and the selected sort column to a table view.
    pub fn apply<K, S>(self, sort: Option<S>, view: &mut TableView<K>)
    where
        K: Copy + PartialEq + From<S>,
    {
        if let Some(sort) = sort {
            view.sort_by(sort.into());
        }
        view.reverse = self.reverse;
        if let Some(query) = self.search {
            view.search(query);
        }
    }
}

// ============================================================================
// Stewards
// ============================================================================

#[derive(Args)]
pub struct ListStewardsArgs {
    /// Column to sort by
    #[arg(long)]
    pub sort: Option<StewardSortArg>,
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Clone, ValueEnum)]
pub enum StewardSortArg {
    FirstName,
    Surname,
}

impl From<StewardSortArg> for StewardSort {
    fn from(val: StewardSortArg) -> Self {
        match val {
            StewardSortArg::FirstName => StewardSort::FirstName,
            StewardSortArg::Surname => StewardSort::Surname,
        }
    }
}

/// Create a new steward
#[derive(Args)]
pub struct CreateStewardArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub surname: String,
}

impl From<CreateStewardArgs> for NewSteward {
    fn from(val: CreateStewardArgs) -> Self {
        NewSteward {
            first_name: val.first_name,
            surname: val.surname,
        }
    }
}

/// Change the name of a steward
#[derive(Args)]
pub struct UpdateStewardArgs {
    pub id: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
}

impl UpdateStewardArgs {
    pub fn apply(self, steward: &mut Steward) {
        if let Some(first_name) = self.first_name {
            steward.first_name = first_name;
        }
        if let Some(surname) = self.surname {
            steward.surname = surname;
        }
    }
}

#[derive(Subcommand)]
pub enum StewardCommands {
    /// List all stewards
    #[command(aliases = ["l", "ls"])]
    List(ListStewardsArgs),
    /// Show a steward with their flights
    #[command(alias = "s")]
    Show(IdArgs),
    /// Create a new steward
    #[command(alias = "c")]
    Create(CreateStewardArgs),
    /// Update a steward
    #[command(alias = "u")]
    Update(UpdateStewardArgs),
    /// Delete a steward without assigned flights
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Flights
// ============================================================================

#[derive(Args)]
pub struct ListFlightsArgs {
    /// Column to sort by
    #[arg(long)]
    pub sort: Option<FlightSortArg>,
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Clone, ValueEnum)]
pub enum FlightSortArg {
    Id,
    Departure,
    Arrival,
}

impl From<FlightSortArg> for FlightSort {
    fn from(val: FlightSortArg) -> Self {
        match val {
            FlightSortArg::Id => FlightSort::Id,
            FlightSortArg::Departure => FlightSort::Departure,
            FlightSortArg::Arrival => FlightSort::Arrival,
        }
    }
}

/// Schedule a new flight
#[derive(Args)]
pub struct CreateFlightArgs {
    /// Departure destination id
    #[arg(long)]
    pub from: String,
    /// Arrival destination id
    #[arg(long)]
    pub to: String,
    /// Departure instant, e.g. 2023-05-01T10:00:00Z
    #[arg(long)]
    pub departure: Timestamp,
    /// Arrival instant
    #[arg(long)]
    pub arrival: Timestamp,
    /// Airplane id
    #[arg(long)]
    pub airplane: String,
    /// Crew steward ids, comma separated
    #[arg(long = "stewards", value_delimiter = ',')]
    pub steward_ids: Vec<String>,
}

impl TryFrom<CreateFlightArgs> for FlightForm {
    type Error = ClientError;

    fn try_from(val: CreateFlightArgs) -> Result<Self, Self::Error> {
        Ok(FlightForm {
            departure_location_id: Some(parse_id("departureLocationId", &val.from)?),
            arrival_location_id: Some(parse_id("arrivalLocationId", &val.to)?),
            departure_time: Some(val.departure),
            arrival_time: Some(val.arrival),
            airplane_id: Some(parse_id("airplaneId", &val.airplane)?),
            steward_ids: IntListField::new("stewardIds").parse(&val.steward_ids)?,
        })
    }
}

/// Reschedule or re-crew a flight
#[derive(Args)]
pub struct UpdateFlightArgs {
    pub id: String,
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub departure: Option<Timestamp>,
    #[arg(long)]
    pub arrival: Option<Timestamp>,
    #[arg(long)]
    pub airplane: Option<String>,
    /// Replaces the crew, comma separated
    #[arg(long = "stewards", value_delimiter = ',')]
    pub steward_ids: Option<Vec<String>>,
}

impl UpdateFlightArgs {
    pub fn apply(self, flight: &mut Flight) -> Result<(), ClientError> {
        if let Some(id) = parse_optional_id("departureLocationId", self.from.as_ref())? {
            flight.departure_location_id = id;
        }
        if let Some(id) = parse_optional_id("arrivalLocationId", self.to.as_ref())? {
            flight.arrival_location_id = id;
        }
        if let Some(id) = parse_optional_id("airplaneId", self.airplane.as_ref())? {
            flight.airplane_id = id;
        }
        if let Some(ids) = self.steward_ids {
            flight.steward_ids = IntListField::new("stewardIds").parse(&ids)?;
        }
        if let Some(departure) = self.departure {
            flight.departure_time = departure;
        }
        if let Some(arrival) = self.arrival {
            flight.arrival_time = arrival;
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum FlightCommands {
    /// List all flights
    #[command(aliases = ["l", "ls"])]
    List(ListFlightsArgs),
    /// Show a flight
    #[command(alias = "s")]
    Show(IdArgs),
    /// Schedule a new flight
    #[command(alias = "c")]
    Create(CreateFlightArgs),
    /// Update a flight
    #[command(alias = "u")]
    Update(UpdateFlightArgs),
    /// Cancel a flight
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Airplanes
// ============================================================================

#[derive(Args)]
pub struct ListAirplanesArgs {
    /// Column to sort by
    #[arg(long)]
    pub sort: Option<AirplaneSortArg>,
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Clone, ValueEnum)]
pub enum AirplaneSortArg {
    Name,
    Type,
    Capacity,
}

impl From<AirplaneSortArg> for AirplaneSort {
    fn from(val: AirplaneSortArg) -> Self {
        match val {
            AirplaneSortArg::Name => AirplaneSort::Name,
            AirplaneSortArg::Type => AirplaneSort::Type,
            AirplaneSortArg::Capacity => AirplaneSort::Capacity,
        }
    }
}

/// Add an airplane to the fleet
#[derive(Args)]
pub struct CreateAirplaneArgs {
    #[arg(long)]
    pub name: String,
    /// Airplane model, e.g. "Airbus A320"
    #[arg(long = "type")]
    pub airplane_type: String,
    /// Number of passenger seats
    #[arg(long)]
    pub capacity: String,
}

impl TryFrom<CreateAirplaneArgs> for NewAirplane {
    type Error = ClientError;

    fn try_from(val: CreateAirplaneArgs) -> Result<Self, Self::Error> {
        Ok(NewAirplane {
            name: val.name,
            airplane_type: val.airplane_type,
            capacity: IntField::new("capacity").parse(&val.capacity)?,
        })
    }
}

/// Change an airplane
#[derive(Args)]
pub struct UpdateAirplaneArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub airplane_type: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
}

impl UpdateAirplaneArgs {
    pub fn apply(self, airplane: &mut Airplane) -> Result<(), ClientError> {
        if let Some(capacity) = self.capacity {
            airplane.capacity = IntField::new("capacity").parse(&capacity)?;
        }
        if let Some(name) = self.name {
            airplane.name = name;
        }
        if let Some(airplane_type) = self.airplane_type {
            airplane.airplane_type = airplane_type;
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum AirplaneCommands {
    /// List the fleet
    #[command(aliases = ["l", "ls"])]
    List(ListAirplanesArgs),
    /// Show an airplane
    #[command(alias = "s")]
    Show(IdArgs),
    /// Add an airplane
    #[command(alias = "c")]
    Create(CreateAirplaneArgs),
    /// Update an airplane
    #[command(alias = "u")]
    Update(UpdateAirplaneArgs),
    /// Remove an airplane
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Destinations
// ============================================================================

#[derive(Args)]
pub struct ListDestinationsArgs {
    /// Column to sort by
    #[arg(long)]
    pub sort: Option<DestinationSortArg>,
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Clone, ValueEnum)]
pub enum DestinationSortArg {
    Country,
    City,
}

impl From<DestinationSortArg> for DestinationSort {
    fn from(val: DestinationSortArg) -> Self {
        match val {
            DestinationSortArg::Country => DestinationSort::Country,
            DestinationSortArg::City => DestinationSort::City,
        }
    }
}

/// Add a destination
#[derive(Args)]
pub struct CreateDestinationArgs {
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub city: String,
}

impl From<CreateDestinationArgs> for NewDestination {
    fn from(val: CreateDestinationArgs) -> Self {
        NewDestination {
            country: val.country,
            city: val.city,
        }
    }
}

/// Rename a destination
#[derive(Args)]
pub struct UpdateDestinationArgs {
    pub id: String,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
}

impl UpdateDestinationArgs {
    pub fn apply(self, destination: &mut Destination) {
        if let Some(country) = self.country {
            destination.country = country;
        }
        if let Some(city) = self.city {
            destination.city = city;
        }
    }
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    /// List all destinations
    #[command(aliases = ["l", "ls"])]
    List(ListDestinationsArgs),
    /// Show a destination with its incoming and outgoing flights
    #[command(alias = "s")]
    Show(IdArgs),
    /// Add a destination
    #[command(alias = "c")]
    Create(CreateDestinationArgs),
    /// Update a destination
    #[command(alias = "u")]
    Update(UpdateDestinationArgs),
    /// Delete a destination without flights
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}
