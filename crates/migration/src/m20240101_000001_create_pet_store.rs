//! Create `pet_store` table.
//!
//! All descriptive columns are nullable: upserts copy the inbound payload
//! wholesale, so an absent field clears the column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStore::Table)
                    .if_not_exists()
                    .col(big_integer(PetStore::Id).primary_key().auto_increment())
                    .col(ColumnDef::new(PetStore::PetStoreName).string_len(128).null())
                    .col(ColumnDef::new(PetStore::PetStoreAddress).string_len(255).null())
                    .col(ColumnDef::new(PetStore::PetStoreCity).string_len(128).null())
                    .col(ColumnDef::new(PetStore::PetStoreState).string_len(64).null())
                    .col(ColumnDef::new(PetStore::PetStoreZip).string_len(16).null())
                    .col(ColumnDef::new(PetStore::PetStorePhone).string_len(32).null())
                    .col(timestamp_with_time_zone(PetStore::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PetStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PetStore { Table, Id, PetStoreName, PetStoreAddress, PetStoreCity, PetStoreState, PetStoreZip, PetStorePhone, CreatedAt }
