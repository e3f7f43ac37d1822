use tracing_subscriber::EnvFilter;

use cinerec::api::{create_router, AppState};
use cinerec::config::Config;
use cinerec::dataset;
use cinerec::engine::RecommenderEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A load failure is fatal: the process must not start serving.
    let (ratings, movies) = dataset::load(&config.ratings_path, &config.movies_path)?;
    tracing::info!(
        ratings = ratings.len(),
        movies = movies.len(),
        "Dataset loaded"
    );

    let engine = RecommenderEngine::new(&ratings, movies);
    let state = AppState::new(engine);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
