//! Shared test utilities for database setup

#[cfg(test)]
pub mod test_db {
  use chrono::NaiveDateTime;
  use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, Database,
    DatabaseConnection, DbBackend, Schema,
  };
  use uuid::Uuid;

  use crate::entity::*;

  /// Creates an in-memory SQLite database with all required tables
  pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    // Create partner table
    let stmt = schema.create_table_from_entity(partner::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    // Create limit table
    let stmt = schema.create_table_from_entity(limit::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db.execute_unprepared(migration::ACTIVE_LIMIT_INDEX).await.unwrap();

    db
  }

  pub async fn partner(
    db: &DatabaseConnection,
    name: &str,
    is_active: bool,
    issued: i32,
  ) -> partner::Model {
    partner::ActiveModel {
      id: Set(Uuid::new_v4()),
      name: Set(name.into()),
      is_active: Set(is_active),
      number_issued_promo_codes: Set(issued),
    }
    .insert(db)
    .await
    .unwrap()
  }

  /// Inserts a limit created at `created` ending three months later.
  pub async fn limit(
    db: &DatabaseConnection,
    partner_id: Uuid,
    limit: i32,
    created: NaiveDateTime,
    cancelled: bool,
  ) -> limit::Model {
    limit::ActiveModel {
      id: Set(Uuid::new_v4()),
      partner_id: Set(partner_id),
      limit: Set(limit),
      create_date: Set(created),
      end_date: Set(created.checked_add_months(chrono::Months::new(3))),
      cancel_date: Set(cancelled.then_some(created)),
    }
    .insert(db)
    .await
    .unwrap()
  }
}
