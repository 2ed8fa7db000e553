//! Create `customer` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(big_integer(Customer::Id).primary_key().auto_increment())
                    .col(ColumnDef::new(Customer::CustomerFirstName).string_len(128).null())
                    .col(ColumnDef::new(Customer::CustomerLastName).string_len(128).null())
                    .col(ColumnDef::new(Customer::CustomerEmail).string_len(255).null())
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, CustomerFirstName, CustomerLastName, CustomerEmail, CreatedAt }
