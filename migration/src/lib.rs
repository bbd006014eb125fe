pub use sea_orm_migration::prelude::*;

mod m20201009_000001_create_partners;
mod m20201009_000002_create_partner_limits;
mod m20201009_000003_seed_partners;

pub use m20201009_000002_create_partner_limits::ACTIVE_LIMIT_INDEX;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20201009_000001_create_partners::Migration),
      Box::new(m20201009_000002_create_partner_limits::Migration),
      Box::new(m20201009_000003_seed_partners::Migration),
    ]
  }
}
