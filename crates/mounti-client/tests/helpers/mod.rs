//! Shared test helpers: an in-memory Mounti backend served over real HTTP.
//!
//! The stub speaks either dialect. Entities are kept in snake_case and
//! rewritten to camelCase with UPPERCASE enum tags on the way out when the
//! stub plays the Spring backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use mounti_client::MountiClient;
use mounti_client::session::MemoryTokenStore;
use mounti_core::config::AppConfig;
use mounti_core::types::Dialect;
use mounti_core::types::dialect::snake_to_camel;

/// Password shared by every seeded account.
pub const PASSWORD: &str = "secret1";
/// Seeded transporter account.
pub const TRANSPORTER_EMAIL: &str = "karim@example.com";
/// Seeded client account.
pub const CLIENT_EMAIL: &str = "amel@example.com";
/// OAuth session id the stub accepts.
pub const VALID_OAUTH_SESSION: &str = "oauth-session-ok";

/// Enum-valued fields rewritten to UPPERCASE for Spring.
const ENUM_KEYS: &[&str] = &["status", "booking_type", "type"];

struct Account {
    password: String,
    user: Value,
}

/// A booking status change as the stub received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub booking_id: String,
    pub status: String,
    pub via_query: bool,
}

#[derive(Default)]
struct World {
    accounts: Vec<Account>,
    tokens: HashMap<String, String>,
    trips: Vec<Value>,
    bookings: Vec<Value>,
    notifications: Vec<Value>,
    logout_fails: bool,
    logout_calls: usize,
    trip_queries: Vec<Vec<(String, String)>>,
    status_changes: Vec<StatusChange>,
}

impl World {
    fn account(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.user["email"].as_str() == Some(email))
    }

    fn user_by_id(&self, id: &str) -> Option<Value> {
        self.accounts
            .iter()
            .find(|a| a.user["id"].as_str() == Some(id))
            .map(|a| a.user.clone())
    }

    fn issue_token(&mut self, user_id: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), user_id.to_string());
        token
    }
}

#[derive(Clone)]
struct Stub {
    dialect: Dialect,
    world: Arc<Mutex<World>>,
}

impl Stub {
    fn world(&self) -> MutexGuard<'_, World> {
        self.world.lock().expect("stub world poisoned")
    }

    fn wire(&self, value: Value) -> Value {
        to_wire(self.dialect, value)
    }

    fn ok(&self, value: Value) -> Response {
        (StatusCode::OK, Json(self.wire(value))).into_response()
    }

    fn error(&self, status: StatusCode, message: &str) -> Response {
        let body = match self.dialect {
            Dialect::FastApi => json!({ "detail": message }),
            Dialect::Spring => json!({ "status": status.as_u16(), "message": message }),
        };
        (status, Json(body)).into_response()
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<Value, Response> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);
        let world = self.world();
        token
            .and_then(|t| world.tokens.get(&t).cloned())
            .and_then(|user_id| world.user_by_id(&user_id))
            .ok_or_else(|| self.error(StatusCode::UNAUTHORIZED, "Invalid session"))
    }

    fn session_response(&self, token: String, user: Value) -> Response {
        let body = match self.dialect {
            Dialect::FastApi => json!({
                "session_token": token,
                "user": user,
                "expires_at": (chrono::Utc::now() + chrono::Duration::days(7))
                    .naive_utc()
                    .format("%Y-%m-%dT%H:%M:%S%.6f")
                    .to_string(),
            }),
            Dialect::Spring => json!({ "token": token, "type": "Bearer", "user": user }),
        };
        self.ok(body)
    }
}

/// A running stub backend.
pub struct TestBackend {
    pub addr: SocketAddr,
    pub dialect: Dialect,
    stub: Stub,
}

impl TestBackend {
    /// Boot a seeded stub on an ephemeral port.
    pub async fn start(dialect: Dialect) -> Self {
        let stub = Stub {
            dialect,
            world: Arc::new(Mutex::new(seed())),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub address");
        let app = Router::new().nest("/api", routes(dialect)).with_state(stub.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend crashed");
        });

        Self {
            addr,
            dialect,
            stub,
        }
    }

    /// Client configuration pointing at this stub.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = format!("http://{}/api", self.addr);
        config.api.dialect = self.dialect;
        config.api.timeout_seconds = 5;
        config
    }

    /// A fresh client with an in-memory token store.
    pub fn client(&self) -> (MountiClient, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::new());
        let client = MountiClient::with_store(&self.config(), store.clone()).expect("client");
        (client, store)
    }

    /// A client already signed in as `email`.
    pub async fn signed_in(&self, email: &str) -> MountiClient {
        let (client, _store) = self.client();
        client
            .session
            .login(mounti_entity::auth::Credential::password(email, PASSWORD))
            .await
            .expect("login");
        client
    }

    /// Make `POST /auth/logout` answer 500.
    pub fn fail_logout(&self) {
        self.stub.world().logout_fails = true;
    }

    pub fn logout_calls(&self) -> usize {
        self.stub.world().logout_calls
    }

    /// Invalidate every issued token, as a backend restart would.
    pub fn revoke_all_tokens(&self) {
        self.stub.world().tokens.clear();
    }

    /// Issue a token for a seeded account without going through login.
    pub fn issue_token(&self, email: &str) -> String {
        let mut world = self.stub.world();
        let id = world
            .account(email)
            .and_then(|a| a.user["id"].as_str())
            .map(str::to_string)
            .expect("seeded account");
        world.issue_token(&id)
    }

    /// Query parameters of each `GET /trips` received, as sent.
    pub fn trip_queries(&self) -> Vec<Vec<(String, String)>> {
        self.stub.world().trip_queries.clone()
    }

    pub fn status_changes(&self) -> Vec<StatusChange> {
        self.stub.world().status_changes.clone()
    }

    /// Id of the first seeded trip on a route.
    pub fn trip_id(&self, from: &str, to: &str) -> String {
        self.stub
            .world()
            .trips
            .iter()
            .find(|t| t["from_location"] == from && t["to_location"] == to)
            .and_then(|t| t["id"].as_str())
            .map(str::to_string)
            .expect("seeded trip")
    }

    /// Add a notification for a seeded account.
    pub fn notify(&self, email: &str, kind: &str, read: bool) -> String {
        let mut world = self.stub.world();
        let user_id = world
            .account(email)
            .and_then(|a| a.user["id"].as_str())
            .map(str::to_string)
            .expect("seeded account");
        let id = Uuid::new_v4().to_string();
        world.notifications.push(json!({
            "id": id,
            "user_id": user_id,
            "title": "Heads up",
            "message": format!("A {kind} notification"),
            "type": kind,
            "read": read,
            "created_at": "2025-07-05T08:00:00.000001",
        }));
        id
    }
}

fn seed() -> World {
    let karim = json!({
        "id": Uuid::new_v4().to_string(),
        "email": TRANSPORTER_EMAIL,
        "name": "Karim",
        "is_transporter": true,
        "created_at": "2025-06-01T09:00:00",
    });
    let amel = json!({
        "id": Uuid::new_v4().to_string(),
        "email": CLIENT_EMAIL,
        "name": "Amel",
        "is_transporter": false,
        "created_at": "2025-06-02T09:00:00",
    });
    let karim_id = karim["id"].clone();

    let trip = |from: &str, to: &str, day: &str, seats: u32, status: &str| {
        json!({
            "id": Uuid::new_v4().to_string(),
            "transporter_id": karim_id,
            "transporter_name": "Karim",
            "from_location": from,
            "to_location": to,
            "departure_date": format!("{day}T08:00:00"),
            "available_seats": seats,
            "available_weight_kg": 20.0,
            "price_per_seat": 50.0,
            "price_per_kg": 10.0,
            "notes": null,
            "status": status,
            "created_at": "2025-07-01T10:00:00",
        })
    };

    World {
        trips: vec![
            trip("Tunis", "Paris", "2025-08-01", 2, "active"),
            trip("Sfax", "Lyon", "2025-08-03", 3, "active"),
            trip("Tunis", "Marseille", "2025-08-01", 1, "active"),
            trip("Sousse", "Nice", "2025-08-05", 4, "cancelled"),
        ],
        accounts: vec![
            Account {
                password: PASSWORD.to_string(),
                user: karim,
            },
            Account {
                password: PASSWORD.to_string(),
                user: amel,
            },
        ],
        ..World::default()
    }
}

fn routes(dialect: Dialect) -> Router<Stub> {
    let router = Router::new()
        .route("/auth/session", post(oauth_session))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route(dialect.current_user_path(), get(current_user))
        .route("/trips", get(list_trips).post(create_trip))
        .route("/trips/my", get(my_trips))
        .route(
            "/trips/{id}",
            get(get_trip).put(update_trip).delete(delete_trip),
        )
        .route("/bookings", post(create_booking))
        .route("/bookings/my", get(my_bookings))
        .route("/bookings/trip/{trip_id}", get(trip_bookings))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/status", put(update_booking_status))
        .route("/notifications", get(list_notifications))
        .route("/notifications/{id}/read", put(mark_notification_read));

    if dialect.has_unread_count_endpoint() {
        router.route("/notifications/unread-count", get(unread_count))
    } else {
        router
    }
}

async fn oauth_session(State(stub): State<Stub>, body: Bytes) -> Response {
    let body = normalize(parse(&body));
    if body["session_id"] != VALID_OAUTH_SESSION {
        return stub.error(StatusCode::BAD_REQUEST, "Invalid session");
    }
    let (token, user) = {
        let mut world = stub.world();
        let user = world.account(CLIENT_EMAIL).map(|a| a.user.clone()).expect("seeded");
        let id = user["id"].as_str().unwrap_or_default().to_string();
        (world.issue_token(&id), user)
    };
    stub.session_response(token, user)
}

async fn login(State(stub): State<Stub>, body: Bytes) -> Response {
    let body = normalize(parse(&body));
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let found = {
        let mut world = stub.world();
        let user = world
            .account(email)
            .filter(|a| a.password == password)
            .map(|a| a.user.clone());
        user.map(|u| {
            let id = u["id"].as_str().unwrap_or_default().to_string();
            (world.issue_token(&id), u)
        })
    };
    match found {
        Some((token, user)) => stub.session_response(token, user),
        None => match stub.dialect {
            Dialect::Spring => (
                StatusCode::BAD_REQUEST,
                "Error: Invalid email or password!",
            )
                .into_response(),
            Dialect::FastApi => stub.error(StatusCode::UNAUTHORIZED, "Invalid credentials"),
        },
    }
}

async fn register(State(stub): State<Stub>, body: Bytes) -> Response {
    let body = normalize(parse(&body));
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let (token, user) = {
        let mut world = stub.world();
        if world.account(&email).is_some() {
            return stub.error(StatusCode::BAD_REQUEST, "Error: Email is already in use!");
        }
        let user = json!({
            "id": Uuid::new_v4().to_string(),
            "email": email,
            "name": body["name"],
            "is_transporter": body["is_transporter"].as_bool().unwrap_or(false),
            "created_at": "2025-07-10T12:00:00",
        });
        world.accounts.push(Account {
            password: body["password"].as_str().unwrap_or_default().to_string(),
            user: user.clone(),
        });
        let id = user["id"].as_str().unwrap_or_default().to_string();
        (world.issue_token(&id), user)
    };
    stub.session_response(token, user)
}

async fn logout(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let mut world = stub.world();
    world.logout_calls += 1;
    if world.logout_fails {
        return stub.error(StatusCode::INTERNAL_SERVER_ERROR, "Logout unavailable");
    }
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        world.tokens.remove(token);
    }
    stub.ok(json!({ "message": "Logged out successfully" }))
}

async fn current_user(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    match stub.authenticate(&headers) {
        Ok(user) => stub.ok(user),
        Err(resp) => resp,
    }
}

async fn list_trips(
    State(stub): State<Stub>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let mut world = stub.world();
    world.trip_queries.push(query.clone());
    let criteria: HashMap<String, String> = query
        .into_iter()
        .map(|(k, v)| (camel_to_snake(&k), v))
        .collect();
    let contains = |trip: &Value, key: &str| match criteria.get(key) {
        Some(wanted) => trip[key]
            .as_str()
            .is_some_and(|v| v.to_lowercase().contains(&wanted.to_lowercase())),
        None => true,
    };
    let trips: Vec<Value> = world
        .trips
        .iter()
        .filter(|t| t["status"] == "active")
        .filter(|t| contains(t, "from_location") && contains(t, "to_location"))
        .filter(|t| match criteria.get("departure_date") {
            Some(day) => t["departure_date"]
                .as_str()
                .is_some_and(|d| d.starts_with(day.as_str())),
            None => true,
        })
        .cloned()
        .collect();
    stub.ok(Value::Array(trips))
}

async fn my_trips(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let trips: Vec<Value> = stub
        .world()
        .trips
        .iter()
        .filter(|t| t["transporter_id"] == user["id"])
        .cloned()
        .collect();
    stub.ok(Value::Array(trips))
}

async fn get_trip(State(stub): State<Stub>, Path(id): Path<String>) -> Response {
    let trip = stub.world().trips.iter().find(|t| t["id"] == id).cloned();
    match trip {
        Some(trip) => stub.ok(trip),
        None => stub.error(StatusCode::NOT_FOUND, "Trip not found"),
    }
}

async fn create_trip(State(stub): State<Stub>, headers: HeaderMap, body: Bytes) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let mut trip = normalize(parse(&body));
    if let Some(fields) = trip.as_object_mut() {
        fields.insert("id".into(), json!(Uuid::new_v4().to_string()));
        fields.insert("transporter_id".into(), user["id"].clone());
        fields.insert("transporter_name".into(), user["name"].clone());
        fields.insert("status".into(), json!("active"));
        fields.insert("created_at".into(), json!("2025-07-10T12:00:00"));
    }
    stub.world().trips.push(trip.clone());
    stub.ok(trip)
}

async fn update_trip(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let changes = normalize(parse(&body));
    let mut world = stub.world();
    let Some(trip) = world.trips.iter_mut().find(|t| t["id"] == id) else {
        return stub.error(StatusCode::NOT_FOUND, "Trip not found");
    };
    if trip["transporter_id"] != user["id"] {
        return stub.error(StatusCode::FORBIDDEN, "Not authorized to update this trip");
    }
    if let (Some(fields), Some(changes)) = (trip.as_object_mut(), changes.as_object()) {
        for (k, v) in changes {
            fields.insert(k.clone(), v.clone());
        }
    }
    let updated = trip.clone();
    stub.ok(updated)
}

async fn delete_trip(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = stub.authenticate(&headers) {
        return resp;
    }
    let mut world = stub.world();
    let before = world.trips.len();
    world.trips.retain(|t| t["id"] != id);
    let removed = world.trips.len() < before;
    if removed {
        StatusCode::OK.into_response()
    } else {
        stub.error(StatusCode::NOT_FOUND, "Trip not found")
    }
}

async fn create_booking(State(stub): State<Stub>, headers: HeaderMap, body: Bytes) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let request = normalize(parse(&body));
    let kind = request["booking_type"].as_str().unwrap_or_default().to_lowercase();
    let quantity = request["quantity"].as_f64().unwrap_or_default();

    let mut world = stub.world();
    let Some(trip) = world
        .trips
        .iter()
        .find(|t| t["id"] == request["trip_id"])
        .cloned()
    else {
        return stub.error(StatusCode::NOT_FOUND, "Trip not found");
    };

    let (unit, capacity, message) = if kind == "seat" {
        (
            trip["price_per_seat"].as_f64(),
            trip["available_seats"].as_f64(),
            "Not enough seats available",
        )
    } else {
        (
            trip["price_per_kg"].as_f64(),
            trip["available_weight_kg"].as_f64(),
            "Not enough weight capacity available",
        )
    };
    if quantity > capacity.unwrap_or_default() {
        return stub.error(StatusCode::BAD_REQUEST, message);
    }

    let booking = json!({
        "id": Uuid::new_v4().to_string(),
        "trip_id": trip["id"],
        "client_id": user["id"],
        "client_name": user["name"],
        "booking_type": kind,
        "quantity": request["quantity"],
        "total_price": quantity * unit.unwrap_or_default(),
        "status": "pending",
        "created_at": chrono::Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    });
    world.bookings.push(booking.clone());
    world.notifications.push(json!({
        "id": Uuid::new_v4().to_string(),
        "user_id": trip["transporter_id"],
        "title": "New Booking Request",
        "message": format!(
            "{} wants to book {} {}(s) for your trip from {} to {}",
            user["name"].as_str().unwrap_or_default(),
            request["quantity"],
            kind,
            trip["from_location"].as_str().unwrap_or_default(),
            trip["to_location"].as_str().unwrap_or_default(),
        ),
        "type": "booking_request",
        "read": false,
        "created_at": "2025-07-10T12:00:00",
    }));
    stub.ok(booking)
}

async fn my_bookings(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let bookings: Vec<Value> = stub
        .world()
        .bookings
        .iter()
        .filter(|b| b["client_id"] == user["id"])
        .cloned()
        .collect();
    stub.ok(Value::Array(bookings))
}

async fn trip_bookings(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(trip_id): Path<String>,
) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let world = stub.world();
    let owns = world
        .trips
        .iter()
        .any(|t| t["id"] == trip_id && t["transporter_id"] == user["id"]);
    if !owns {
        return stub.error(StatusCode::NOT_FOUND, "Trip not found or not authorized");
    }
    let bookings: Vec<Value> = world
        .bookings
        .iter()
        .filter(|b| b["trip_id"] == trip_id)
        .cloned()
        .collect();
    stub.ok(Value::Array(bookings))
}

async fn get_booking(State(stub): State<Stub>, Path(id): Path<String>) -> Response {
    let booking = stub.world().bookings.iter().find(|b| b["id"] == id).cloned();
    match booking {
        Some(booking) => stub.ok(booking),
        None => stub.error(StatusCode::NOT_FOUND, "Booking not found"),
    }
}

async fn update_booking_status(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let (status, via_query) = match stub.dialect {
        Dialect::FastApi => (query.get("status").cloned(), true),
        Dialect::Spring => (
            parse(&body)["status"].as_str().map(str::to_string),
            false,
        ),
    };
    let Some(status) = status else {
        return stub.error(StatusCode::UNPROCESSABLE_ENTITY, "status is required");
    };

    let mut world = stub.world();
    let Some(booking) = world.bookings.iter().find(|b| b["id"] == id).cloned() else {
        return stub.error(StatusCode::NOT_FOUND, "Booking not found");
    };
    let owner = world
        .trips
        .iter()
        .find(|t| t["id"] == booking["trip_id"])
        .map(|t| t["transporter_id"].clone());
    if owner.as_ref() != Some(&user["id"]) {
        return stub.error(StatusCode::FORBIDDEN, "Not authorized to update this booking");
    }
    if let Some(b) = world.bookings.iter_mut().find(|b| b["id"] == id) {
        b["status"] = json!(status.to_lowercase());
    }
    world.status_changes.push(StatusChange {
        booking_id: id,
        status,
        via_query,
    });
    StatusCode::OK.into_response()
}

async fn list_notifications(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let list: Vec<Value> = stub
        .world()
        .notifications
        .iter()
        .filter(|n| n["user_id"] == user["id"])
        .cloned()
        .collect();
    stub.ok(Value::Array(list))
}

async fn mark_notification_read(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let mut world = stub.world();
    let found = world
        .notifications
        .iter_mut()
        .find(|n| n["id"] == id && n["user_id"] == user["id"]);
    match found {
        Some(n) => {
            n["read"] = json!(true);
            stub.ok(json!({ "message": "Notification marked as read" }))
        }
        None => {
            stub.error(StatusCode::NOT_FOUND, "Notification not found")
        }
    }
}

async fn unread_count(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let user = match stub.authenticate(&headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let count = stub
        .world()
        .notifications
        .iter()
        .filter(|n| n["user_id"] == user["id"] && n["read"] == false)
        .count();
    (StatusCode::OK, Json(json!(count))).into_response()
}

fn parse(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Rewrite a canonical snake_case entity into the dialect's wire shape.
pub fn to_wire(dialect: Dialect, value: Value) -> Value {
    match (dialect, value) {
        (Dialect::FastApi, value) => value,
        (Dialect::Spring, Value::Object(map)) => {
            let mut out = Map::new();
            for (key, inner) in map {
                let inner = match inner {
                    Value::String(tag) if ENUM_KEYS.contains(&key.as_str()) => {
                        Value::String(tag.to_uppercase())
                    }
                    other => to_wire(Dialect::Spring, other),
                };
                let key = if key == "read" {
                    "isRead".to_string()
                } else {
                    snake_to_camel(&key)
                };
                out.insert(key, inner);
            }
            Value::Object(out)
        }
        (Dialect::Spring, Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|v| to_wire(Dialect::Spring, v))
                .collect(),
        ),
        (_, other) => other,
    }
}

/// Bring an incoming body of either dialect into canonical snake_case.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    let k = camel_to_snake(&k);
                    let v = match v {
                        Value::String(tag) if ENUM_KEYS.contains(&k.as_str()) => {
                            Value::String(tag.to_lowercase())
                        }
                        other => normalize(other),
                    };
                    (k, v)
                })
                .collect(),
        ),
        other => other,
    }
}

fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
