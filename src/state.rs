use crate::{config::Config, prelude::*, repo};

pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
}

impl AppState {
  pub async fn new(config: Config) -> anyhow::Result<Self> {
    use anyhow::Context;

    let db = Database::connect(config.database_url.as_str())
      .await
      .with_context(|| format!("connect to `{}`", config.database_url))?;

    migration::Migrator::up(&db, None)
      .await
      .context("run migrations")?;

    info!("database ready at {}", config.database_url);
    Ok(Self { db, config })
  }

  pub fn partners(&self) -> repo::Partners<'_> {
    repo::Partners::new(&self.db)
  }
}
