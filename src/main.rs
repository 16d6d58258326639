//! Selection API server.
//!
//! Serves `GET /health` and `POST /select`: selections intersecting the
//! reference boundary get the placeholder dataset, everything else is
//! resolved against the Overpass API.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use url::Url;

use kartograf::overpass::OverpassFetcher;
use kartograf::selection::ReferenceBoundary;
use kartograf::server::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "kartograf")]
#[command(about = "Map selection API server")]
struct Args {
    /// Listen address
    #[arg(
        short,
        long,
        default_value = "0.0.0.0:8000",
        env = "KARTOGRAF_LISTEN"
    )]
    listen: String,

    /// Overpass API endpoint
    #[arg(
        long,
        default_value = "https://overpass-api.de/api/interpreter",
        env = "KARTOGRAF_OVERPASS_URL"
    )]
    overpass_url: String,

    /// Allowed CORS origin
    #[arg(
        long,
        default_value = "http://localhost:5173",
        env = "KARTOGRAF_FRONTEND_ORIGIN"
    )]
    frontend_origin: String,

    /// API title reported at startup
    #[arg(long, default_value = "Kartograf API", env = "KARTOGRAF_API_TITLE")]
    api_title: String,

    /// API version reported at startup
    #[arg(
        long,
        default_value = env!("CARGO_PKG_VERSION"),
        env = "KARTOGRAF_API_VERSION"
    )]
    api_version: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kartograf=info,tower_http=info".into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("{} {}", args.api_title, args.api_version);

    let overpass_url = Url::parse(&args.overpass_url).context("Invalid Overpass API URL")?;
    info!("Using Overpass endpoint {}", overpass_url);

    let state = Arc::new(AppState {
        boundary: ReferenceBoundary::sweden(),
        fetcher: OverpassFetcher::new(overpass_url.as_str()),
    });

    let app = build_router(state, &args.frontend_origin)?;

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
