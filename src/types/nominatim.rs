use serde::Serialize;

/// Query parameters for a nominatim `/search` request
#[derive(Serialize, Debug)]
pub struct SearchParams<'a> {
    pub q: &'a str,
    pub format: &'static str,
    pub polygon_geojson: u8,
    pub addressdetails: u8,
}

impl<'a> SearchParams<'a> {
    pub fn geojson(query: &'a str) -> Self {
        Self {
            q: query,
            format: "geojson",
            polygon_geojson: 1,
            addressdetails: 1,
        }
    }
}
