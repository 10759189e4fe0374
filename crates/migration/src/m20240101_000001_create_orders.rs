//! Create `orders` table.
//!
//! `id` is supplied by the caller; uniqueness comes from the primary key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(text(Orders::Id).primary_key())
                    .col(double(Orders::Amount).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, Amount }
