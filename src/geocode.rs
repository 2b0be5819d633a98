use color_eyre::eyre;
use geo_types::Point;
use geojson::{Feature, FeatureCollection};
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    types::{
        feature::{PlaceFeature, PlaceFeatureCollection},
        nominatim::SearchParams,
    },
};

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request to nominatim failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("nominatim response is not a geojson feature collection: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("place {index} has no usable {field}")]
    MissingField { index: usize, field: &'static str },
}

/// Forward geocoder backed by a nominatim instance
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    search_url: String,
}

impl Geocoder {
    pub fn new(client: reqwest::Client, nominatim_url: &str) -> Self {
        Self {
            client,
            search_url: format!("{}/search", nominatim_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self::new(client, &config.nominatim_url))
    }

    /// Search for `query`, yielding no features if anything goes wrong.
    /// Failures are logged, never returned.
    #[instrument(skip(self))]
    pub async fn forward_geocode(&self, query: &str) -> PlaceFeatureCollection {
        match self.try_forward_geocode(query).await {
            Ok(features) => features.into(),
            Err(err) => {
                error!("Failed to forward geocode: {err}");
                PlaceFeatureCollection::default()
            }
        }
    }

    /// One request to nominatim, transformed all or nothing
    pub async fn try_forward_geocode(
        &self,
        query: &str,
    ) -> Result<Vec<PlaceFeature>, GeocodeError> {
        let body = self
            .client
            .get(&self.search_url)
            .query(&SearchParams::geojson(query))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let collection: FeatureCollection = serde_json::from_str(&body)?;
        debug!("nominatim matched {} places", collection.features.len());
        place_features(collection)
    }
}

pub fn place_features(collection: FeatureCollection) -> Result<Vec<PlaceFeature>, GeocodeError> {
    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| place_feature(index, feature))
        .collect()
}

fn place_feature(index: usize, feature: Feature) -> Result<PlaceFeature, GeocodeError> {
    let missing = |field| GeocodeError::MissingField { index, field };
    let center = feature
        .bbox
        .as_deref()
        .and_then(bbox_center)
        .ok_or_else(|| missing("bbox"))?;
    let properties = feature.properties.ok_or_else(|| missing("properties"))?;
    let display_name = properties
        .get("display_name")
        .and_then(|name| name.as_str())
        .ok_or_else(|| missing("display_name"))?
        .to_string();
    Ok(PlaceFeature::new(center, display_name, properties))
}

/// Midpoint of a `[minX, minY, maxX, maxY]` box
pub fn bbox_center(bbox: &[f64]) -> Option<Point> {
    match *bbox {
        [min_x, min_y, max_x, max_y] => Some(Point::new(
            min_x + (max_x - min_x) / 2.0,
            min_y + (max_y - min_y) / 2.0,
        )),
        _ => None,
    }
}
