use sea_orm_migration::prelude::*;

use crate::m20250604_090000_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum DebitCards {
    Table,
    Id,
    UserId,
    Number,
    CardType,
    ExpirationDate,
    DisabledAt,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DebitCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DebitCards::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DebitCards::UserId).string().not_null())
                    .col(ColumnDef::new(DebitCards::Number).string().not_null())
                    .col(ColumnDef::new(DebitCards::CardType).string().not_null())
                    .col(
                        ColumnDef::new(DebitCards::ExpirationDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DebitCards::DisabledAt).timestamp())
                    .col(ColumnDef::new(DebitCards::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-debit_cards-user_id")
                            .from(DebitCards::Table, DebitCards::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-debit_cards-user_id-created_at")
                    .table(DebitCards::Table)
                    .col(DebitCards::UserId)
                    .col(DebitCards::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DebitCards::Table).to_owned())
            .await
    }
}
