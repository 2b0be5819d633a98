use std::{env, net::SocketAddr};

use color_eyre::eyre::{Result, WrapErr};

use crate::{map::parse_bbox, types::map::Bbox};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub nominatim_url: String,
    pub user_agent: String,
    pub map: MapDefaults,
}

/// Server-wide fallbacks for map options requests
#[derive(Debug, Clone, PartialEq)]
pub struct MapDefaults {
    pub style: Option<String>,
    pub bounds: Option<Bbox>,
    pub lang: String,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            style: None,
            bounds: None,
            lang: String::from("en"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = var_or("STREETMAP_BIND_ADDR", "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .wrap_err("STREETMAP_BIND_ADDR is not a socket address")?;
        let bounds = env::var("STREETMAP_BOUNDS")
            .ok()
            .map(|bounds| parse_bbox(&bounds))
            .transpose()
            .wrap_err("STREETMAP_BOUNDS is not a bbox")?;
        Ok(Self {
            bind_addr,
            nominatim_url: var_or("STREETMAP_NOMINATIM_URL", DEFAULT_NOMINATIM_URL),
            user_agent: var_or(
                "STREETMAP_USER_AGENT",
                concat!("streetmap-server/", env!("CARGO_PKG_VERSION")),
            ),
            map: MapDefaults {
                style: env::var("STREETMAP_STYLE").ok(),
                bounds,
                lang: var_or("STREETMAP_LANG", "en"),
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
