use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub port: u16,
  pub rate_per_second: u64,
  pub rate_burst: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_url: "sqlite:partners.db?mode=rwc".into(),
      port: 3000,
      rate_per_second: 2,
      rate_burst: 100,
    }
  }
}

impl Config {
  pub fn from_env() -> Self {
    let default = Self::default();
    Self {
      database_url: env::var("DATABASE_URL").unwrap_or(default.database_url),
      port: parsed("PORT").unwrap_or(default.port),
      rate_per_second: parsed("RATE_PER_SECOND")
        .unwrap_or(default.rate_per_second),
      rate_burst: parsed("RATE_BURST").unwrap_or(default.rate_burst),
    }
  }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
  env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
