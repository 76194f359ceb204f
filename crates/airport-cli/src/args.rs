use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AirplaneCommands, DestinationCommands, FlightCommands, StewardCommands};

/// Terminal client for the airport back office
///
/// Manages the stewards, flights, airplanes and destinations stored by the
/// back office REST API. Without a command the dashboard of flights currently
/// in the air is shown.
#[derive(Parser)]
#[command(version, about, name = "airport")]
pub struct Args {
    /// Root of the back office REST API. Defaults to the config file value or
    /// http://localhost:8080/pa165/api
    #[arg(long, global = true, env = "AIRPORT_API_URL")]
    pub api_url: Option<String>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/airport/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// IANA time zone for flight times, e.g. Europe/Prague. Defaults to UTC
    #[arg(long, global = true, value_name = "TZ")]
    pub time_zone: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Open the view behind a URL fragment, e.g. `/steward/3`
    #[command(alias = "o")]
    Open {
        /// Fragment such as `/flights` or `/destinations/2`; unknown
        /// fragments show the dashboard
        fragment: String,
    },
    /// Manage stewards
    #[command(alias = "s")]
    Stewards {
        #[command(subcommand)]
        command: StewardCommands,
    },
    /// Manage flights
    #[command(alias = "f")]
    Flights {
        #[command(subcommand)]
        command: FlightCommands,
    },
    /// Manage airplanes
    #[command(alias = "a")]
    Airplanes {
        #[command(subcommand)]
        command: AirplaneCommands,
    },
    /// Manage destinations
    #[command(alias = "d")]
    Destinations {
        #[command(subcommand)]
        command: DestinationCommands,
    },
}
