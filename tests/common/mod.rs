#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    routing::get,
    Router,
};

/// What the stub nominatim saw for each search
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub params: HashMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
pub struct StubNominatim {
    pub addr: SocketAddr,
    pub seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubNominatim {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Serve `body` with `status` from `/search`
pub async fn stub_nominatim(status: StatusCode, body: impl Into<String>) -> StubNominatim {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(StubState {
        status,
        body: body.into(),
        seen: seen.clone(),
    });
    let app = Router::new()
        .route("/search", get(search))
        .with_state(state);
    StubNominatim {
        addr: serve(app).await,
        seen,
    }
}

async fn search(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .seen
        .lock()
        .unwrap()
        .push(SeenRequest { params, user_agent });
    (state.status, state.body.clone())
}

pub async fn serve(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

/// An address nothing listens on
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn two_places() -> String {
    serde_json::json!({
        "type": "FeatureCollection",
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
        "features": [
            {
                "type": "Feature",
                "bbox": [10.0, 20.0, 30.0, 40.0],
                "properties": {
                    "place_id": 1,
                    "display_name": "Rue de la Loi, Brussels",
                    "address": { "road": "Rue de la Loi", "city": "Brussels" }
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[10.0, 20.0], [30.0, 40.0]]
                }
            },
            {
                "type": "Feature",
                "bbox": [4.3, 50.8, 4.4, 50.9],
                "properties": { "place_id": 2, "display_name": "Grand-Place, Brussels" },
                "geometry": { "type": "Point", "coordinates": [4.35, 50.85] }
            }
        ]
    })
    .to_string()
}
