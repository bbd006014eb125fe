use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Partners::Table)
          .if_not_exists()
          .col(ColumnDef::new(Partners::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Partners::Name).string().not_null())
          .col(
            ColumnDef::new(Partners::IsActive)
              .boolean()
              .not_null()
              .default(true),
          )
          .col(
            ColumnDef::new(Partners::NumberIssuedPromoCodes)
              .integer()
              .not_null()
              .default(0),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Partners::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Partners {
  Table,
  Id,
  Name,
  IsActive,
  NumberIssuedPromoCodes,
}
