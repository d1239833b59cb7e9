mod config;
mod domain;
mod handlers;
mod middleware;
mod repo;
mod routes;
mod state;
mod validation;

use axum::middleware::from_fn;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use crate::routes::create_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let state = AppState::new(config.clone());

    let app = create_router()
        .layer(from_fn(middleware::trace_middleware))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("movie_api listening on {}", config.bind_addr());
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
