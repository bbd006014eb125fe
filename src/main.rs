mod config;
mod entity;
mod error;
mod model;
mod prelude;
mod repo;
mod server;
mod state;
mod sv;
mod utils;

use tracing_subscriber::{
  EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{config::Config, prelude::*, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "partner_limits=debug,tower_http=debug,axum=trace,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  info!("Starting Partner Limits Server v{}", env!("CARGO_PKG_VERSION"));

  let app = Arc::new(AppState::new(Config::from_env()).await?);

  server::serve(app, async {
    if let Err(err) = tokio::signal::ctrl_c().await {
      error!("Failed to listen for Ctrl-C: {err}");
    }
    info!("Shutting down");
  })
  .await
}
