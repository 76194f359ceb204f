mod common;

use std::time::Duration;

use airport_core::{
    controllers::{
        AirplaneDetailController, AirplanesController, DashboardController,
        DestinationDetailController, DestinationsController, FlightDetailController,
        FlightsController, StewardDetailController, StewardsController,
    },
    models::NewSteward,
    EntityKind, Route, Table,
};
use common::{context, FakeServer};
use jiff::{
    tz::{self, TimeZone},
    SignedDuration, Timestamp,
};

fn hours_from_now(hours: i64) -> String {
    Timestamp::now()
        .checked_add(SignedDuration::from_hours(hours))
        .expect("timestamp in range")
        .to_string()
}

#[tokio::test]
async fn test_deleting_steward_with_flights_is_refused() {
    let server = FakeServer::new();
    let steward = server.steward("Jana", "Novakova");
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T11:00:00Z",
        plane,
        &[steward],
    );

    let ctx = context(&server);
    let mut controller = StewardsController::new(ctx.clone());
    assert!(controller.load().await);

    assert!(!controller.delete(steward).await);

    let alerts = ctx.alerts.snapshot();
    assert_eq!(
        alerts.error.as_deref(),
        Some("Steward has assigned flights. Cannot be deleted.")
    );
    assert!(alerts.success.is_none());
    assert_eq!(controller.stewards.len(), 1);
    assert_eq!(controller.stewards[0].id, steward);
    // No re-fetch after a failed mutation.
    assert_eq!(
        server.requests(),
        vec!["GET /stewards".to_string(), format!("DELETE /stewards/{steward}")]
    );
}

#[tokio::test]
async fn test_successful_delete_refetches_collection() {
    let server = FakeServer::new();
    let first = server.steward("Jana", "Novakova");
    server.steward("Petr", "Svoboda");

    let ctx = context(&server);
    let mut controller = StewardsController::new(ctx.clone());
    controller.load().await;
    assert_eq!(controller.stewards.len(), 2);

    assert!(controller.delete(first).await);
    assert_eq!(
        ctx.alerts.snapshot().success,
        Some(format!("Steward \"{first}\" was successfully deleted."))
    );

    let requests = server.requests();
    assert_eq!(requests.last().map(String::as_str), Some("GET /stewards"));

    let mut fresh = StewardsController::new(context(&server));
    fresh.load().await;
    assert_eq!(controller.stewards, fresh.stewards);
}

#[tokio::test]
async fn test_create_resets_draft_and_lists_new_entity() {
    let server = FakeServer::new();
    let ctx = context(&server);
    let mut controller = StewardsController::new(ctx.clone());
    controller.draft = NewSteward {
        first_name: "Eva".to_string(),
        surname: "Dvorakova".to_string(),
    };

    let created = controller.create().await.expect("steward created");
    assert_eq!(created.full_name(), "Eva Dvorakova");
    assert_eq!(controller.draft, NewSteward::default());
    assert_eq!(controller.stewards, vec![created.clone()]);
    assert_eq!(
        ctx.alerts.snapshot().success,
        Some(format!("A new steward \"{}\" was created.", created.id))
    );
}

#[tokio::test]
async fn test_empty_collection_without_envelope() {
    let server = FakeServer::new();
    let ctx = context(&server);
    let mut controller = AirplanesController::new(ctx.clone());

    assert!(controller.load().await);
    assert!(controller.airplanes.is_empty());
    assert!(ctx.alerts.snapshot().is_empty());
}

#[tokio::test]
async fn test_unknown_error_code_quotes_server_message() {
    let server = FakeServer::new();
    let plane = server.airplane("OK-ABC", "Boeing 737", 160);
    server.fail(
        &format!("/airplanes/{plane}"),
        500,
        r#"{"code": "ServerException", "message": "disk full"}"#,
    );

    let ctx = context(&server);
    let mut controller = AirplanesController::new(ctx.clone());
    controller.load().await;
    assert!(!controller.delete(plane).await);

    assert_eq!(
        ctx.alerts.snapshot().error.as_deref(),
        Some("Cannot delete airplane! Reason given by the server: disk full (ServerException)")
    );
    assert_eq!(controller.airplanes.len(), 1);
}

#[tokio::test]
async fn test_destination_with_flights_cannot_be_deleted() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T11:00:00Z",
        plane,
        &[],
    );

    let ctx = context(&server);
    let mut controller = DestinationsController::new(ctx.clone());
    controller.load().await;
    assert!(!controller.delete(vienna).await);

    assert_eq!(
        ctx.alerts.snapshot().error.as_deref(),
        Some("Destination has assigned flights. Cannot be deleted.")
    );
    assert_eq!(server.count(EntityKind::Destination), 2);
    let cities: Vec<&str> = controller.visible().iter().map(|d| d.city.as_str()).collect();
    assert_eq!(cities, vec!["Vienna", "Prague"]);
}

async fn load_flights_view(server: &std::sync::Arc<FakeServer>) -> FlightsController {
    let mut controller = FlightsController::new(context(server));
    controller.load().await;
    controller
}

#[tokio::test(start_paused = true)]
async fn test_flights_view_independent_of_arrival_order() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    let steward = server.steward("Jana", "Novakova");
    server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T11:00:00Z",
        plane,
        &[steward],
    );

    server.delay("/airplanes", Duration::from_millis(200));
    let slow_airplanes = load_flights_view(&server).await;
    let first_order = server.responded();

    server.delay("/airplanes", Duration::ZERO);
    server.delay("/destinations", Duration::from_millis(200));
    let slow_destinations = load_flights_view(&server).await;
    let second_order = server.responded()[first_order.len()..].to_vec();

    assert_eq!(first_order.last().map(String::as_str), Some("/airplanes"));
    assert_eq!(second_order.last().map(String::as_str), Some("/destinations"));

    for controller in [&slow_airplanes, &slow_destinations] {
        assert_eq!(controller.flights.len(), 1);
        assert_eq!(controller.airplanes.len(), 1);
        assert_eq!(controller.destinations.len(), 2);
        assert_eq!(controller.stewards.len(), 1);
    }
    assert_eq!(slow_airplanes.airplanes, slow_destinations.airplanes);
    assert_eq!(slow_airplanes.destinations, slow_destinations.destinations);
}

#[tokio::test]
async fn test_flights_view_keeps_successful_fetches_when_one_fails() {
    let server = FakeServer::new();
    server.destination("Czech Republic", "Prague");
    server.airplane("OK-XYZ", "Airbus A320", 180);
    server.disconnect("/stewards");

    let ctx = context(&server);
    let mut controller = FlightsController::new(ctx.clone());
    controller.load().await;

    assert_eq!(controller.destinations.len(), 1);
    assert_eq!(controller.airplanes.len(), 1);
    assert!(controller.stewards.is_empty());
    let error = ctx.alerts.snapshot().error.expect("error reported");
    assert!(error.starts_with("Cannot load steward! The server could not be reached"));
}

#[tokio::test]
async fn test_incomplete_flight_form_is_not_sent() {
    let server = FakeServer::new();
    let ctx = context(&server);
    let mut controller = FlightsController::new(ctx.clone());
    controller.form.departure_location_id = Some(1);

    assert!(controller.create().await.is_none());
    assert!(server.requests().is_empty());
    let error = ctx.alerts.snapshot().error.expect("error reported");
    assert!(error.contains("arrivalLocationId"));
}

#[tokio::test]
async fn test_created_flight_keeps_its_instants_through_update() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    let spare = server.airplane("OK-ABC", "Boeing 737", 150);
    let steward = server.steward("Jana", "Novakova");
    let departure: Timestamp = "2023-05-01T10:00:00Z".parse().unwrap();
    let arrival: Timestamp = "2023-05-01T14:30:00Z".parse().unwrap();

    let ctx = context(&server);
    let mut controller = FlightsController::new(ctx.clone());
    controller.load().await;
    controller.form.departure_location_id = Some(prague);
    controller.form.arrival_location_id = Some(vienna);
    controller.form.departure_time = Some(departure);
    controller.form.arrival_time = Some(arrival);
    controller.form.airplane_id = Some(plane);
    controller.form.steward_ids = vec![steward];

    let created = controller.create().await.expect("flight created");
    assert_eq!(
        ctx.alerts.snapshot().success,
        Some(format!("A new flight \"{}\" was created.", created.id))
    );
    assert_eq!(controller.form, Default::default());
    assert_eq!(server.count(EntityKind::Flight), 1);

    let mut fresh = FlightsController::new(context(&server));
    fresh.load().await;
    assert_eq!(controller.flights, fresh.flights);

    let table = Table::new(controller.visible()).to_string();
    assert!(table.contains("01.05.2023 - 10:00 AM"));
    assert!(table.contains("01.05.2023 - 2:30 PM"));

    let mut detail = FlightDetailController::new(ctx.clone(), created.id);
    assert!(detail.load().await);
    if let Some(flight) = detail.flight.as_mut() {
        flight.airplane_id = spare;
    }
    assert!(detail.update().await);
    assert_eq!(
        ctx.alerts.snapshot().success,
        Some(format!("Flight \"{}\" was successfully updated.", created.id))
    );

    let mut reloaded = FlightDetailController::new(context(&server), created.id);
    reloaded.load().await;
    let flight = reloaded.flight.expect("flight still exists");
    assert_eq!(flight.airplane_id, spare);
    assert_eq!(flight.departure_time, departure);
    assert_eq!(flight.arrival_time, arrival);
    assert_eq!(flight.steward_ids, vec![steward]);
}

#[tokio::test]
async fn test_airplane_update_is_persisted() {
    let server = FakeServer::new();
    let id = server.airplane("OK-XYZ", "Airbus A320", 180);

    let ctx = context(&server);
    let mut detail = AirplaneDetailController::new(ctx.clone(), id);
    assert!(detail.load().await);
    if let Some(airplane) = detail.airplane.as_mut() {
        airplane.capacity = 186;
    }
    assert!(detail.update().await);
    assert_eq!(detail.airplane.as_ref().map(|a| a.capacity), Some(186));
    assert_eq!(
        server.requests(),
        vec![
            format!("GET /airplanes/{id}"),
            format!("POST /airplanes/{id}/update"),
            format!("GET /airplanes/{id}"),
        ]
    );
}

#[tokio::test]
async fn test_destination_detail_partial_failure_keeps_previous_data() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T11:00:00Z",
        plane,
        &[],
    );
    server.flight(
        vienna,
        prague,
        "2023-05-01T12:00:00Z",
        "2023-05-01T13:00:00Z",
        plane,
        &[],
    );

    let ctx = context(&server);
    let mut detail = DestinationDetailController::new(ctx.clone(), vienna);
    detail.load().await;
    assert_eq!(detail.incoming.len(), 1);
    assert_eq!(detail.outgoing.len(), 1);
    assert!(ctx.alerts.snapshot().error.is_none());

    server.fail(&format!("/destinations/{vienna}/incomingFlights"), 502, "Bad Gateway");
    detail.load().await;

    assert_eq!(detail.destination.as_ref().map(|d| d.city.as_str()), Some("Vienna"));
    assert_eq!(detail.incoming.len(), 1);
    assert_eq!(detail.outgoing.len(), 1);
    assert_eq!(
        ctx.alerts.snapshot().error.as_deref(),
        Some("Cannot load flight! Reason given by the server: Bad Gateway (HTTP 502)")
    );
}

#[tokio::test]
async fn test_destination_edit_can_be_abandoned_or_saved() {
    let server = FakeServer::new();
    let id = server.destination("Czech Republic", "Prague");

    let ctx = context(&server);
    let mut detail = DestinationDetailController::new(ctx.clone(), id);
    detail.load().await;

    detail.save_draft();
    if let Some(destination) = detail.destination.as_mut() {
        destination.city = "Brno".to_string();
    }
    detail.restore_draft();
    assert_eq!(detail.destination.as_ref().map(|d| d.city.as_str()), Some("Prague"));

    detail.save_draft();
    if let Some(destination) = detail.destination.as_mut() {
        destination.city = "Brno".to_string();
    }
    assert!(detail.update().await);
    assert_eq!(
        ctx.alerts.snapshot().success,
        Some(format!("Destination \"{id}\" was successfully updated."))
    );

    let mut fresh = DestinationDetailController::new(context(&server), id);
    fresh.load().await;
    assert_eq!(fresh.destination.map(|d| d.city), Some("Brno".to_string()));
}

#[tokio::test]
async fn test_steward_detail_lists_crewed_flights() {
    let server = FakeServer::new();
    let jana = server.steward("Jana", "Novakova");
    let petr = server.steward("Petr", "Svoboda");
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    let flight = server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T11:00:00Z",
        plane,
        &[jana],
    );

    let ctx = context(&server);
    let mut detail = StewardDetailController::new(ctx.clone(), jana);
    detail.load().await;
    assert_eq!(detail.flights.iter().map(|f| f.id).collect::<Vec<_>>(), vec![flight]);

    let mut other = StewardDetailController::new(ctx.clone(), petr);
    other.load().await;
    assert!(other.flights.is_empty());
    assert_eq!(other.steward.map(|s| s.surname), Some("Svoboda".to_string()));
}

#[tokio::test]
async fn test_missing_entity_is_reported() {
    let server = FakeServer::new();
    let ctx = context(&server);
    let mut detail = StewardDetailController::new(ctx.clone(), 99);
    detail.load().await;

    assert!(detail.steward.is_none());
    assert_eq!(
        ctx.alerts.snapshot().error.as_deref(),
        Some("Cannot load non-existent steward!")
    );
}

#[tokio::test]
async fn test_dashboard_shows_flights_in_the_air() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    let airborne = server.flight(
        prague,
        vienna,
        &hours_from_now(-1),
        &hours_from_now(1),
        plane,
        &[],
    );
    server.flight(
        vienna,
        prague,
        &hours_from_now(3),
        &hours_from_now(4),
        plane,
        &[],
    );

    let ctx = context(&server);
    let mut dashboard = DashboardController::new(ctx.clone());
    assert!(dashboard.load().await);
    assert_eq!(dashboard.flights.iter().map(|f| f.id).collect::<Vec<_>>(), vec![airborne]);

    dashboard.go_to_flight(airborne);
    assert_eq!(ctx.location.path(), Route::Flight(airborne));
}

#[tokio::test]
async fn test_flight_table_formats_times_in_zone() {
    let server = FakeServer::new();
    let prague = server.destination("Czech Republic", "Prague");
    let vienna = server.destination("Austria", "Vienna");
    let plane = server.airplane("OK-XYZ", "Airbus A320", 180);
    server.flight(
        prague,
        vienna,
        "2023-05-01T10:00:00Z",
        "2023-05-01T14:30:00Z",
        plane,
        &[],
    );

    let controller = load_flights_view(&server).await;
    let before = controller.flights.clone();

    let utc = Table::new(controller.visible()).to_string();
    assert!(utc.contains("01.05.2023 - 10:00 AM"));
    assert!(utc.contains("01.05.2023 - 2:30 PM"));

    let summer_time = TimeZone::fixed(tz::offset(2));
    let local = Table::new(controller.visible()).in_zone(summer_time).to_string();
    assert!(local.contains("01.05.2023 - 12:00 PM"));
    assert!(local.contains("01.05.2023 - 4:30 PM"));

    assert_eq!(controller.flights, before);
}

#[tokio::test]
async fn test_go_to_detail_navigates() {
    let server = FakeServer::new();
    let ctx = context(&server);

    StewardsController::new(ctx.clone()).go_to_detail(4);
    assert_eq!(ctx.location.path(), Route::Steward(4));

    DestinationsController::new(ctx.clone()).go_to_detail(2);
    assert_eq!(ctx.location.path(), Route::Destination(2));
    assert_eq!(ctx.location.path().to_string(), "/destinations/2");
}
