use sea_orm_migration::prelude::*;

use crate::m20250604_090000_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Loans {
    Table,
    Id,
    UserId,
    Amount,
    Terms,
    OutstandingAmount,
    CurrencyCode,
    ProcessedAt,
    Status,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Loans::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Loans::UserId).string().not_null())
                    .col(ColumnDef::new(Loans::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Loans::Terms).integer().not_null())
                    .col(
                        ColumnDef::new(Loans::OutstandingAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Loans::CurrencyCode).string().not_null())
                    .col(ColumnDef::new(Loans::ProcessedAt).timestamp().not_null())
                    .col(ColumnDef::new(Loans::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-loans-user_id")
                            .from(Loans::Table, Loans::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-loans-user_id-processed_at")
                    .table(Loans::Table)
                    .col(Loans::UserId)
                    .col(Loans::ProcessedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Loans::Table).to_owned())
            .await
    }
}
