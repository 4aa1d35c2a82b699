pub use sea_orm_migration::prelude::*;

mod m20250604_090000_users;
mod m20250604_093000_debit_cards;
mod m20250604_101500_debit_card_transactions;
mod m20250701_120000_loans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250604_090000_users::Migration),
            Box::new(m20250604_093000_debit_cards::Migration),
            Box::new(m20250604_101500_debit_card_transactions::Migration),
            Box::new(m20250701_120000_loans::Migration),
        ]
    }
}
