use chrono::NaiveDate;
use sea_orm_migration::prelude::*;
use uuid::Uuid;

use super::{
  m20201009_000001_create_partners::Partners,
  m20201009_000002_create_partner_limits::PartnerPromoCodeLimits,
};

const PARTNER_ID: Uuid =
  Uuid::from_u128(0x7d994823_8226_4273_b063_1a95f3cc1df8);
const LIMIT_ID: Uuid = Uuid::from_u128(0xe00633a5_978a_420e_a7d6_3e1dab116393);

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let date = |y, m, d| {
      NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DbErr::Custom(format!("invalid seed date {y}-{m}-{d}")))
    };

    manager
      .exec_stmt(
        Query::insert()
          .into_table(Partners::Table)
          .columns([
            Partners::Id,
            Partners::Name,
            Partners::IsActive,
            Partners::NumberIssuedPromoCodes,
          ])
          .values_panic([
            PARTNER_ID.into(),
            "Суперигрушки".into(),
            true.into(),
            0.into(),
          ])
          .to_owned(),
      )
      .await?;

    manager
      .exec_stmt(
        Query::insert()
          .into_table(PartnerPromoCodeLimits::Table)
          .columns([
            PartnerPromoCodeLimits::Id,
            PartnerPromoCodeLimits::PartnerId,
            PartnerPromoCodeLimits::Limit,
            PartnerPromoCodeLimits::CreateDate,
            PartnerPromoCodeLimits::EndDate,
          ])
          .values_panic([
            LIMIT_ID.into(),
            PARTNER_ID.into(),
            100.into(),
            date(2020, 7, 9)?.into(),
            date(2020, 10, 9)?.into(),
          ])
          .to_owned(),
      )
      .await?;

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .exec_stmt(
        Query::delete()
          .from_table(Partners::Table)
          .and_where(Expr::col(Partners::Id).eq(PARTNER_ID))
          .to_owned(),
      )
      .await
  }
}
