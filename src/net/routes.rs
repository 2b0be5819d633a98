use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, instrument};

use crate::{
    config::MapDefaults,
    geocode::Geocoder,
    map::build_map_options,
    net::response::{ResponseError, Result},
    nickname::resolve_nickname,
    types::{
        feature::PlaceFeatureCollection,
        map::{MapOptions, MapRequest},
        person::Person,
    },
};

pub struct AppState {
    pub geocoder: Geocoder,
    pub map: MapDefaults,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/geocode", get(geocode))
        .route("/nickname", post(nickname))
        .route("/map/options", get(map_options))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

#[derive(Deserialize, Debug)]
pub struct GeocodeQuery {
    pub q: String,
}

#[instrument(skip(state))]
async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeocodeQuery>,
) -> Json<PlaceFeatureCollection> {
    Json(state.geocoder.forward_geocode(&query.q).await)
}

#[derive(Deserialize, Debug)]
pub struct NicknameQuery {
    pub lang: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct NicknameResponse {
    pub nickname: Option<String>,
}

async fn nickname(
    Query(query): Query<NicknameQuery>,
    Json(person): Json<Person>,
) -> Json<NicknameResponse> {
    let nickname = resolve_nickname(&person, &query.lang).map(str::to_string);
    debug!("nickname for {:?}: {:?}", query.lang, nickname);
    Json(NicknameResponse { nickname })
}

async fn map_options(
    State(state): State<Arc<AppState>>,
    Query(request): Query<MapRequest>,
) -> Result<Json<MapOptions>> {
    let options = build_map_options(&request, &state.map)
        .map_err(|e| ResponseError::bad_request(e.to_string()))?;
    Ok(Json(options))
}
