use serde::{Deserialize, Serialize};

pub type Bbox = [f64; 4];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Query string of a map options request
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MapRequest {
    #[serde(default)]
    pub theme: Theme,
    pub lang: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub zoom: Option<f64>,
    pub bbox: Option<String>,
}

impl MapRequest {
    /// Center and zoom, only when all three parts were given
    pub fn center_zoom(&self) -> Option<([f64; 2], f64)> {
        match (self.lon, self.lat, self.zoom) {
            (Some(lon), Some(lat), Some(zoom)) => Some(([lon, lat], zoom)),
            _ => None,
        }
    }
}

/// Options handed to the client side map library on initialization
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub container: String,
    pub hash: bool,
    pub style: String,
    #[serde(flatten)]
    pub view: MapView,
    pub controls: Controls,
    pub geocoder: GeocoderOptions,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MapView {
    CenterZoom {
        center: [f64; 2],
        zoom: f64,
    },
    /// Without bounds the map library falls back to its own default view
    #[serde(rename_all = "camelCase")]
    Bounds {
        #[serde(skip_serializing_if = "Option::is_none")]
        bounds: Option<Bbox>,
        fit_bounds_options: FitBoundsOptions,
    },
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FitBoundsOptions {
    pub padding: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Controls {
    pub navigation: NavigationControl,
    pub scale: ScaleControl,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationControl {
    pub show_compass: bool,
    pub position: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScaleControl {
    pub unit: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeocoderOptions {
    pub bbox: Option<Bbox>,
    pub enable_event_logging: bool,
    pub language: String,
}
