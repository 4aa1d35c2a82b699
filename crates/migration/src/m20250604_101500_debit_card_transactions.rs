use sea_orm_migration::prelude::*;

use crate::m20250604_093000_debit_cards::DebitCards;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum DebitCardTransactions {
    Table,
    Id,
    DebitCardId,
    Amount,
    CurrencyCode,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DebitCardTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DebitCardTransactions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DebitCardTransactions::DebitCardId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebitCardTransactions::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebitCardTransactions::CurrencyCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebitCardTransactions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-debit_card_transactions-debit_card_id")
                            .from(
                                DebitCardTransactions::Table,
                                DebitCardTransactions::DebitCardId,
                            )
                            .to(DebitCards::Table, DebitCards::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-debit_card_transactions-debit_card_id-created_at")
                    .table(DebitCardTransactions::Table)
                    .col(DebitCardTransactions::DebitCardId)
                    .col(DebitCardTransactions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DebitCardTransactions::Table)
                    .to_owned(),
            )
            .await
    }
}
