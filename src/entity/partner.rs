use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::limit;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partners")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub is_active: bool,
  pub number_issued_promo_codes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "limit::Entity")]
  Limits,
}

impl Related<limit::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Limits.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
