mod handlers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
  Router,
  routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{prelude::*, state::AppState};

pub fn routes(app: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/api/v1/partners", get(handlers::partners))
    .route("/api/v1/partners/{id}/limits", post(handlers::set_limit))
    .route("/api/v1/partners/{id}/limits/{limit_id}", get(handlers::limit))
    .route(
      "/api/v1/partners/{id}/canceledLimits",
      post(handlers::cancel_limit),
    )
    .layer(
      ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
          .allow_origin(Any)
          .allow_methods(Any)
          .allow_headers(Any),
      ),
    )
    .with_state(app)
}

/// Binds the configured port and serves until `shutdown` resolves.
pub async fn serve(
  app: Arc<AppState>,
  shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(app.config.rate_per_second)
      .burst_size(app.config.rate_burst)
      .finish()
      .context("Failed to build rate limiter config")?,
  );

  let governor_limiter = governor_conf.limiter().clone();

  let gc = tokio::spawn(async move {
    loop {
      tokio::time::sleep(Duration::from_secs(60)).await;
      governor_limiter.retain_recent();
    }
  });

  let addr = SocketAddr::from(([0, 0, 0, 0], app.config.port));
  let router = routes(app)
    .layer(GovernorLayer::new(governor_conf))
    .into_make_service_with_connect_info::<SocketAddr>();

  let served = async {
    let listener = tokio::net::TcpListener::bind(addr)
      .await
      .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP Server listening on {addr}");

    axum::serve(listener, router)
      .with_graceful_shutdown(shutdown)
      .await
      .context("HTTP Server stopped")
  }
  .await;

  gc.abort();
  served
}
