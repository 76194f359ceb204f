//! Airport CLI Application
//!
//! Command-line interface for the airport back office: every command drives
//! one view-model controller and renders its view together with the alerts
//! it produced.

mod app;
mod args;
mod cli;
mod renderer;

use std::{process::ExitCode, time::Duration};

use airport_core::{ApiClientBuilder, AppContext, Route};
use anyhow::{Context, Result};
use app::App;
use args::{Args, Commands};
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        api_url,
        config_file,
        timeout,
        time_zone,
        no_color,
        command,
    } = Args::parse();

    let api = ApiClientBuilder::new()
        .with_config_file(config_file)
        .with_api_url(api_url)
        .with_timeout(timeout.map(Duration::from_secs))
        .with_time_zone(time_zone)
        .build()
        .context("Failed to initialize API client")?;
    let tz = api
        .config()
        .time_zone()
        .context("Failed to resolve display time zone")?;

    info!("Airport client started against {}", api.config().api_url());

    let ctx = AppContext::new(api);
    let app = App::new(ctx.clone(), TerminalRenderer::new(!no_color), tz);

    match command {
        Some(Open { fragment }) => app.open(Route::resolve(&fragment)).await?,
        Some(Stewards { command }) => app.handle_steward_command(command).await?,
        Some(Flights { command }) => app.handle_flight_command(command).await?,
        Some(Airplanes { command }) => app.handle_airplane_command(command).await?,
        Some(Destinations { command }) => app.handle_destination_command(command).await?,
        None => app.open(Route::Main).await?,
    }

    if ctx.alerts.has_error() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
