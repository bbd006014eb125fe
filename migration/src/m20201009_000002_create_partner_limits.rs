use sea_orm_migration::prelude::*;

use super::m20201009_000001_create_partners::Partners;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(PartnerPromoCodeLimits::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::Id)
              .uuid()
              .not_null()
              .primary_key(),
          )
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::PartnerId).uuid().not_null(),
          )
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::Limit).integer().not_null(),
          )
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::CreateDate)
              .date_time()
              .not_null(),
          )
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::EndDate).date_time().null(),
          )
          .col(
            ColumnDef::new(PartnerPromoCodeLimits::CancelDate)
              .date_time()
              .null(),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_partner_limits_partner")
              .from(
                PartnerPromoCodeLimits::Table,
                PartnerPromoCodeLimits::PartnerId,
              )
              .to(Partners::Table, Partners::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_partner_limits_partner")
          .table(PartnerPromoCodeLimits::Table)
          .col(PartnerPromoCodeLimits::PartnerId)
          .to_owned(),
      )
      .await?;

    // at most one active limit per partner
    manager
      .get_connection()
      .execute_unprepared(ACTIVE_LIMIT_INDEX)
      .await?;

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(PartnerPromoCodeLimits::Table).to_owned())
      .await
  }
}

pub const ACTIVE_LIMIT_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
   idx_partner_limits_active ON partner_promo_code_limits (partner_id) \
   WHERE cancel_date IS NULL";

#[derive(DeriveIden)]
pub enum PartnerPromoCodeLimits {
  Table,
  Id,
  PartnerId,
  Limit,
  CreateDate,
  EndDate,
  CancelDate,
}
