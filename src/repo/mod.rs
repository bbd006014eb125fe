//! Keyed persistence behind the services.
//!
//! Services never hold state of their own between calls; they load an
//! aggregate through a [`Repository`], mutate it and hand it back.

mod partner;

use async_trait::async_trait;
use uuid::Uuid;

pub use partner::Partners;

use crate::prelude::*;

#[async_trait]
pub trait Repository<T>: Send + Sync {
  async fn by_id(&self, id: Uuid) -> Result<Option<T>>;

  async fn all(&self) -> Result<Vec<T>>;

  /// Persists the whole aggregate. Durable once it returns `Ok`.
  async fn update(&self, item: &T) -> Result<()>;
}
