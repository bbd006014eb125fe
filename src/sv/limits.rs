use uuid::Uuid;

use crate::{
  entity::limit,
  model::{Partner, SetLimitReq},
  prelude::*,
  repo::Repository,
  utils,
};

/// Applies limit changes to partners. Stateless: everything it needs is
/// loaded from and written back to the borrowed repository per call.
pub struct Limits<'a, R> {
  repo: &'a R,
}

impl<'a, R: Repository<Partner>> Limits<'a, R> {
  pub fn new(repo: &'a R) -> Self {
    Self { repo }
  }

  async fn active_partner(&self, id: Uuid) -> Result<Partner> {
    let partner = self.repo.by_id(id).await?.ok_or(Error::PartnerNotFound)?;
    if !partner.is_active {
      return Err(Error::PartnerInactive);
    }
    Ok(partner)
  }

  /// Replaces the partner's active limit with a new one.
  ///
  /// Superseding an active limit resets the issued-code counter. Every
  /// precondition is checked before the partner is touched, so a rejected
  /// request changes nothing.
  pub async fn set(
    &self,
    partner_id: Uuid,
    req: SetLimitReq,
  ) -> Result<limit::Model> {
    let mut partner = self.active_partner(partner_id).await?;

    if req.limit <= 0 {
      return Err(Error::InvalidArgs("limit must be greater than 0".into()));
    }

    let now = utils::now();
    if let Some(active) =
      partner.limits.iter_mut().find(|limit| limit.is_active())
    {
      active.cancel_date = Some(now);
      partner.number_issued_promo_codes = 0;
      debug!("superseding limit {} of partner {}", active.id, partner.id);
    }

    let limit = limit::Model {
      id: Uuid::new_v4(),
      partner_id: partner.id,
      limit: req.limit,
      create_date: now,
      end_date: req.end_date,
      cancel_date: None,
    };
    partner.limits.push(limit.clone());

    self.repo.update(&partner).await?;

    info!(
      "partner {} limit set to {} (limit {})",
      partner.id, limit.limit, limit.id
    );
    Ok(limit)
  }

  /// Cancels the active limit, if any. The issued-code counter is kept.
  pub async fn cancel_active(&self, partner_id: Uuid) -> Result<()> {
    let mut partner = self.active_partner(partner_id).await?;

    if let Some(active) =
      partner.limits.iter_mut().find(|limit| limit.is_active())
    {
      active.cancel_date = Some(utils::now());
      info!("partner {} limit {} cancelled", partner.id, active.id);
    }

    self.repo.update(&partner).await
  }

  pub async fn get(
    &self,
    partner_id: Uuid,
    limit_id: Uuid,
  ) -> Result<limit::Model> {
    let partner =
      self.repo.by_id(partner_id).await?.ok_or(Error::PartnerNotFound)?;

    partner.limit(limit_id).cloned().ok_or(Error::LimitNotFound)
  }
}
