use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::partner;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partner_promo_code_limits")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub partner_id: Uuid,
  pub limit: i32,
  pub create_date: DateTime,
  pub end_date: Option<DateTime>,
  pub cancel_date: Option<DateTime>,
}

impl Model {
  pub fn is_active(&self) -> bool {
    self.cancel_date.is_none()
  }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "partner::Entity",
    from = "Column::PartnerId",
    to = "partner::Column::Id",
    on_delete = "Cascade"
  )]
  Partner,
}

impl Related<partner::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Partner.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
