use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use super::Repository;
use crate::{
  entity::{limit, partner},
  model::Partner,
  prelude::*,
};

pub struct Partners<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Partners<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }
}

#[async_trait]
impl Repository<Partner> for Partners<'_> {
  async fn by_id(&self, id: Uuid) -> Result<Option<Partner>> {
    let Some(model) = partner::Entity::find_by_id(id).one(self.db).await?
    else {
      return Ok(None);
    };

    let limits = model
      .find_related(limit::Entity)
      .order_by_asc(limit::Column::CreateDate)
      .order_by_asc(limit::Column::Id)
      .all(self.db)
      .await?;

    Ok(Some(Partner::new(model, limits)))
  }

  async fn all(&self) -> Result<Vec<Partner>> {
    let partners = partner::Entity::find()
      .order_by_asc(partner::Column::Name)
      .all(self.db)
      .await?;

    let mut limits: HashMap<Uuid, Vec<limit::Model>> = HashMap::new();
    for limit in limit::Entity::find()
      .order_by_asc(limit::Column::CreateDate)
      .order_by_asc(limit::Column::Id)
      .all(self.db)
      .await?
    {
      limits.entry(limit.partner_id).or_default().push(limit);
    }

    Ok(
      partners
        .into_iter()
        .map(|model| {
          let history = limits.remove(&model.id).unwrap_or_default();
          Partner::new(model, history)
        })
        .collect(),
    )
  }

  async fn update(&self, item: &Partner) -> Result<()> {
    let txn = self.db.begin().await?;

    partner::ActiveModel {
      id: Set(item.id),
      name: Set(item.name.clone()),
      is_active: Set(item.is_active),
      number_issued_promo_codes: Set(item.number_issued_promo_codes),
    }
    .update(&txn)
    .await?;

    let stored: HashSet<Uuid> = limit::Entity::find()
      .filter(limit::Column::PartnerId.eq(item.id))
      .all(&txn)
      .await?
      .into_iter()
      .map(|limit| limit.id)
      .collect();

    let (known, fresh): (Vec<_>, Vec<_>) =
      item.limits.iter().partition(|limit| stored.contains(&limit.id));

    // cancellations land before inserts, the active-limit index is unique
    for limit in known {
      active_model(limit).update(&txn).await?;
    }
    for limit in fresh {
      active_model(limit).insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
  }
}

fn active_model(limit: &limit::Model) -> limit::ActiveModel {
  limit::ActiveModel {
    id: Set(limit.id),
    partner_id: Set(limit.partner_id),
    limit: Set(limit.limit),
    create_date: Set(limit.create_date),
    end_date: Set(limit.end_date),
    cancel_date: Set(limit.cancel_date),
  }
}
