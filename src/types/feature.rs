use geo_types::Point;
use geojson::{Geometry, JsonObject};
use serde::{Deserialize, Serialize};

/// Category tag attached to every geocoded feature
pub const PLACE_TYPE: &str = "place";

/// A geocoded place, shaped the way the map's geocoder control renders it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlaceFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    pub place_name: String,
    pub properties: JsonObject,
    pub text: String,
    pub place_type: Vec<String>,
    pub center: [f64; 2],
}

impl PlaceFeature {
    pub fn new(center: Point, display_name: String, properties: JsonObject) -> Self {
        Self {
            feature_type: String::from("Feature"),
            geometry: Geometry::new((&center).into()),
            place_name: display_name.clone(),
            properties,
            text: display_name,
            place_type: vec![PLACE_TYPE.to_string()],
            center: [center.x(), center.y()],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlaceFeatureCollection {
    pub features: Vec<PlaceFeature>,
}

impl From<Vec<PlaceFeature>> for PlaceFeatureCollection {
    fn from(features: Vec<PlaceFeature>) -> Self {
        Self { features }
    }
}
