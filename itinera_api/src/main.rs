mod config;
mod error;
mod health;
mod route;
mod state;

#[cfg(test)]
mod test_utils;

use crate::config::Config;
use crate::health::health_handler;
use crate::route::route_handler::route_handler;
use crate::state::AppState;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use itinera_core::planner::RoutePlanner;
use itinera_osrm::{OsrmClient, OsrmClientParams};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let transport = reqwest::Client::builder()
        .user_agent(concat!("itinera/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let osrm = OsrmClient::new(
        OsrmClientParams {
            osrm_url: config.osrm_url.clone(),
            timeout: config.osrm_timeout,
            overview: config.overview,
        },
        transport,
    );

    let state = Arc::new(AppState {
        planner: RoutePlanner::new(osrm, config.planner),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        osrm = %config.osrm_url,
        ranking = %config.planner.ranking,
        estimate_speed = %config.planner.estimate_speed,
        "itinera listening"
    );

    serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/route", post(route_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}
