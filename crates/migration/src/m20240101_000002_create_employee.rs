//! Create `employee` table with FK to `pet_store`.
//!
//! Every employee belongs to exactly one store; deleting the store removes
//! its employees.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(big_integer(Employee::Id).primary_key().auto_increment())
                    .col(big_integer(Employee::PetStoreId).not_null())
                    .col(ColumnDef::new(Employee::EmployeeFirstName).string_len(128).null())
                    .col(ColumnDef::new(Employee::EmployeeLastName).string_len(128).null())
                    .col(ColumnDef::new(Employee::EmployeePhone).string_len(32).null())
                    .col(ColumnDef::new(Employee::EmployeeJobTitle).string_len(128).null())
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_pet_store")
                            .from(Employee::Table, Employee::PetStoreId)
                            .to(PetStore::Table, PetStore::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, PetStoreId, EmployeeFirstName, EmployeeLastName, EmployeePhone, EmployeeJobTitle, CreatedAt }

#[derive(DeriveIden)]
enum PetStore { Table, Id }
