use streetmap_server::{
    config::Config,
    geocode::Geocoder,
    net::routes::{router, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = AppState {
        geocoder: Geocoder::from_config(&config)?,
        map: config.map.clone(),
    };

    info!("Running on {}", config.bind_addr);
    info!("Geocoding against {}", config.nominatim_url);

    axum::Server::bind(&config.bind_addr)
        .serve(router(state).into_make_service())
        .await?;

    Ok(())
}
