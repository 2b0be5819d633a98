use thiserror::Error;

use crate::{
    config::MapDefaults,
    types::map::{
        Bbox, Controls, FitBoundsOptions, GeocoderOptions, MapOptions, MapRequest, MapView,
        NavigationControl, ScaleControl, Theme,
    },
};

pub const LIGHT_STYLE: &str = "https://tiles.openfreemap.org/styles/positron";
pub const DARK_STYLE: &str = "https://tiles.openfreemap.org/styles/dark";
pub const BOUNDS_PADDING: u32 = 50;

#[derive(Error, Debug, PartialEq)]
pub enum MapError {
    #[error("center and zoom must be finite numbers")]
    InvalidCenter,
    #[error("bbox must be four comma separated numbers, got {0:?}")]
    InvalidBbox(String),
}

/// Parse `minX,minY,maxX,maxY`
pub fn parse_bbox(text: &str) -> Result<Bbox, MapError> {
    let invalid = || MapError::InvalidBbox(text.to_string());
    let coords = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|coord| coord.is_finite())
                .ok_or_else(invalid)
        })
        .collect::<Result<Vec<f64>, MapError>>()?;
    coords.try_into().map_err(|_| invalid())
}

pub fn style_for(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => LIGHT_STYLE,
        Theme::Dark => DARK_STYLE,
    }
}

/// Assemble the options the client initializes its map with.
///
/// Center and zoom take precedence; otherwise the map fits the requested bbox,
/// or the configured default bounds, or neither.
pub fn build_map_options(
    request: &MapRequest,
    defaults: &MapDefaults,
) -> Result<MapOptions, MapError> {
    if [request.lon, request.lat, request.zoom]
        .into_iter()
        .flatten()
        .any(|value| !value.is_finite())
    {
        return Err(MapError::InvalidCenter);
    }

    let bbox = request
        .bbox
        .as_deref()
        .map(parse_bbox)
        .transpose()?
        .or(defaults.bounds);

    let view = match request.center_zoom() {
        Some((center, zoom)) => MapView::CenterZoom { center, zoom },
        None => MapView::Bounds {
            bounds: bbox,
            fit_bounds_options: FitBoundsOptions {
                padding: BOUNDS_PADDING,
            },
        },
    };

    Ok(MapOptions {
        container: String::from("map"),
        hash: true,
        style: defaults
            .style
            .clone()
            .unwrap_or_else(|| style_for(request.theme).to_string()),
        view,
        controls: Controls {
            navigation: NavigationControl {
                show_compass: false,
                position: String::from("top-left"),
            },
            scale: ScaleControl {
                unit: String::from("metric"),
            },
        },
        geocoder: GeocoderOptions {
            bbox,
            enable_event_logging: false,
            language: request
                .lang
                .clone()
                .unwrap_or_else(|| defaults.lang.clone()),
        },
    })
}
