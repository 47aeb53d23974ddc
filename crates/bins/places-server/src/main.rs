use std::net::SocketAddr;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use places_client::GooglePlacesClient;

use crate::settings::{Opts, Settings};

pub mod errors;
pub mod route;
mod settings;

#[derive(Debug, Clone)]
pub struct AppState {
    pub client: GooglePlacesClient,
    pub settings: Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let settings = Settings::new(&opts)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "places_server=info,places_client=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Places API at {}", &settings.places_api.url);

    let state = AppState {
        client: GooglePlacesClient::new(settings.places_api.clone())?,
        settings: settings.clone(),
    };

    let router = route::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", settings.service.host, settings.service.port).parse()?;

    info!("Starting places server on http://{addr}");
    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
