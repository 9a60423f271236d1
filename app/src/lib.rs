pub mod errors;
pub mod handlers;
pub mod request_id;

use axum::{Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{health_check, render_topography};

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(render_topography))
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
}

pub async fn run_server(host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;

    tracing::info!("Serving topography on http://{host}:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
