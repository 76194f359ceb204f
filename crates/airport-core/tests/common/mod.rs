#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
    time::Duration,
};

use airport_core::{
    ApiClientBuilder, ApiRequest, ApiResponse, AppContext, ClientError, EntityKind, Method,
    Transport,
};
use async_trait::async_trait;
use jiff::Timestamp;
use serde_json::{json, Value};

const KINDS: [EntityKind; 4] = [
    EntityKind::Steward,
    EntityKind::Flight,
    EntityKind::Airplane,
    EntityKind::Destination,
];

#[derive(Default)]
struct Store {
    next_id: u64,
    collections: HashMap<&'static str, BTreeMap<u64, Value>>,
}

/// In-memory stand-in for the back office REST API.
///
/// Collections are returned in the HAL envelope (omitted when empty, as the
/// real server does), deleting a steward, destination or airplane still
/// referenced by a flight fails with `PersistenceException`, and single
/// paths can be delayed or made to fail.
#[derive(Default)]
pub struct FakeServer {
    store: Mutex<Store>,
    delays: Mutex<HashMap<String, Duration>>,
    failures: Mutex<HashMap<String, ApiResponse>>,
    unreachable: Mutex<Vec<String>>,
    requests: Mutex<Vec<String>>,
    responded: Mutex<Vec<String>>,
}

impl FakeServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Stores an entity under a fresh id and returns the id.
    pub fn insert(&self, kind: EntityKind, mut entity: Value) -> u64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        entity["id"] = json!(id);
        store
            .collections
            .entry(kind.collection())
            .or_default()
            .insert(id, entity);
        id
    }

    pub fn steward(&self, first_name: &str, surname: &str) -> u64 {
        self.insert(
            EntityKind::Steward,
            json!({"firstName": first_name, "surname": surname}),
        )
    }

    pub fn airplane(&self, name: &str, airplane_type: &str, capacity: u32) -> u64 {
        self.insert(
            EntityKind::Airplane,
            json!({"name": name, "type": airplane_type, "capacity": capacity}),
        )
    }

    pub fn destination(&self, country: &str, city: &str) -> u64 {
        self.insert(
            EntityKind::Destination,
            json!({"country": country, "city": city}),
        )
    }

    pub fn flight(
        &self,
        from: u64,
        to: u64,
        departure: &str,
        arrival: &str,
        airplane: u64,
        stewards: &[u64],
    ) -> u64 {
        self.insert(
            EntityKind::Flight,
            json!({
                "departureLocationId": from,
                "arrivalLocationId": to,
                "departureTime": departure,
                "arrivalTime": arrival,
                "airplaneId": airplane,
                "stewardIds": stewards,
            }),
        )
    }

    /// Holds every response to `path` back for `delay`.
    pub fn delay(&self, path: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
    }

    /// Answers every request to `path` with the given status and body.
    pub fn fail(&self, path: &str, status: u16, body: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(path.to_string(), ApiResponse::new(status, body));
    }

    /// Drops every request to `path` without a response.
    pub fn disconnect(&self, path: &str) {
        self.unreachable.lock().unwrap().push(path.to_string());
    }

    /// Requests received so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Paths in the order their responses were sent.
    pub fn responded(&self) -> Vec<String> {
        self.responded.lock().unwrap().clone()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.store
            .lock()
            .unwrap()
            .collections
            .get(kind.collection())
            .map_or(0, BTreeMap::len)
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        let Some(kind) = segments
            .first()
            .and_then(|c| KINDS.into_iter().find(|k| k.collection() == *c))
        else {
            return not_found("Unknown resource");
        };

        let mut store = self.store.lock().unwrap();
        match (request.method, &segments[1..]) {
            (Method::Get, []) => collection(kind, store.items(kind)),
            (Method::Get, ["current"]) if kind == EntityKind::Flight => {
                let now = Timestamp::now();
                let flights = store
                    .items(EntityKind::Flight)
                    .into_iter()
                    .filter(|f| time(f, "departureTime") <= now && now < time(f, "arrivalTime"))
                    .collect();
                collection(EntityKind::Flight, flights)
            }
            (Method::Get, [id]) => match store.get(kind, id) {
                Some(entity) => ok(&entity),
                None => not_found("Entity not found"),
            },
            (Method::Get, [id, relation]) => {
                let Ok(id) = id.parse::<u64>() else {
                    return not_found("Invalid id");
                };
                let field = match (kind, *relation) {
                    (EntityKind::Steward, "flights") => "stewardIds",
                    (EntityKind::Destination, "incomingFlights") => "arrivalLocationId",
                    (EntityKind::Destination, "outgoingFlights") => "departureLocationId",
                    _ => return not_found("Unknown relation"),
                };
                let flights = store
                    .items(EntityKind::Flight)
                    .into_iter()
                    .filter(|f| references(f, field, id))
                    .collect();
                collection(EntityKind::Flight, flights)
            }
            (Method::Post, ["create"]) => {
                let Some(body) = request.body.clone() else {
                    return invalid("Missing body");
                };
                drop(store);
                let id = self.insert(kind, body);
                let store = self.store.lock().unwrap();
                ok(&store.get(kind, &id.to_string()).unwrap_or_default())
            }
            (Method::Post, [id, "update"]) => {
                let (Ok(id), Some(mut body)) = (id.parse::<u64>(), request.body.clone()) else {
                    return invalid("Missing body");
                };
                let Some(items) = store.collections.get_mut(kind.collection()) else {
                    return not_found("Entity not found");
                };
                if !items.contains_key(&id) {
                    return not_found("Entity not found");
                }
                body["id"] = json!(id);
                items.insert(id, body);
                ApiResponse::new(200, "")
            }
            (Method::Delete, [id]) => {
                let Ok(id) = id.parse::<u64>() else {
                    return not_found("Invalid id");
                };
                let field = match kind {
                    EntityKind::Steward => Some("stewardIds"),
                    EntityKind::Airplane => Some("airplaneId"),
                    _ => None,
                };
                let referenced = store.items(EntityKind::Flight).iter().any(|f| match kind {
                    EntityKind::Destination => {
                        references(f, "departureLocationId", id)
                            || references(f, "arrivalLocationId", id)
                    }
                    _ => field.is_some_and(|field| references(f, field, id)),
                });
                if referenced {
                    return ApiResponse::new(
                        500,
                        json!({
                            "code": "PersistenceException",
                            "message": "could not execute statement; constraint violation"
                        })
                        .to_string(),
                    );
                }
                match store
                    .collections
                    .get_mut(kind.collection())
                    .and_then(|items| items.remove(&id))
                {
                    Some(_) => ApiResponse::new(200, ""),
                    None => not_found("Entity not found"),
                }
            }
            _ => not_found("No handler"),
        }
    }
}

impl Store {
    fn items(&self, kind: EntityKind) -> Vec<Value> {
        self.collections
            .get(kind.collection())
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default()
    }

    fn get(&self, kind: EntityKind, id: &str) -> Option<Value> {
        let id = id.parse::<u64>().ok()?;
        self.collections.get(kind.collection())?.get(&id).cloned()
    }
}

fn time(flight: &Value, field: &str) -> Timestamp {
    flight[field]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Timestamp::MIN)
}

fn references(flight: &Value, field: &str, id: u64) -> bool {
    match &flight[field] {
        Value::Array(ids) => ids.iter().any(|v| v.as_u64() == Some(id)),
        value => value.as_u64() == Some(id),
    }
}

fn collection(kind: EntityKind, items: Vec<Value>) -> ApiResponse {
    if items.is_empty() {
        return ApiResponse::new(200, r#"{"_links": {}}"#);
    }
    let mut embedded = serde_json::Map::new();
    embedded.insert(kind.collection().to_string(), Value::Array(items));
    ok(&json!({ "_embedded": embedded }))
}

fn ok(value: &Value) -> ApiResponse {
    ApiResponse::new(200, value.to_string())
}

fn not_found(message: &str) -> ApiResponse {
    ApiResponse::new(
        404,
        json!({"code": "ResourceNotFoundException", "message": message}).to_string(),
    )
}

fn invalid(message: &str) -> ApiResponse {
    ApiResponse::new(
        400,
        json!({"code": "InvalidRequestException", "message": message}).to_string(),
    )
}

#[async_trait]
impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> airport_core::Result<ApiResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", request.method, request.path));

        let delay = self.delays.lock().unwrap().get(&request.path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.unreachable.lock().unwrap().contains(&request.path) {
            return Err(ClientError::transport(format!("{} {}", request.method, request.path))
                .with_source(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )));
        }

        let canned = self.failures.lock().unwrap().get(&request.path).cloned();
        let response = canned.unwrap_or_else(|| self.handle(&request));
        self.responded.lock().unwrap().push(request.path.clone());
        Ok(response)
    }
}

/// Controller context wired to `server`.
pub fn context(server: &Arc<FakeServer>) -> AppContext {
    let config = tempfile::NamedTempFile::new().expect("Failed to create config file");
    std::fs::write(config.path(), "{}").expect("Failed to write config file");

    let api = ApiClientBuilder::new()
        .with_config_file(Some(config.path()))
        .with_transport(server.clone())
        .build()
        .expect("Failed to build client");
    AppContext::new(api)
}
