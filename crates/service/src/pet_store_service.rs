//! Reconciliation between inbound payloads and persisted state.
//!
//! Mutating operations run inside one transaction: a failure partway through
//! an upsert rolls everything back, so a store and its relation rows never
//! diverge.
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set, TransactionTrait};
use tracing::{info, instrument};

use models::{customer, employee, pet_store, pet_store_customer};

use crate::domain::{
    copy_customer_fields, copy_employee_fields, copy_pet_store_fields, PetStoreCustomer,
    PetStoreData, PetStoreEmployee,
};
use crate::errors::ServiceError;

/// Upsert a pet store: no id creates, an id loads the existing record and
/// overwrites its fields.
#[instrument(skip(db, data), fields(pet_store_id = ?data.pet_store_id))]
pub async fn save_pet_store(
    db: &DatabaseConnection,
    data: PetStoreData,
) -> Result<PetStoreData, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut store = match data.pet_store_id {
        None => pet_store::ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() },
        Some(id) => pet_store::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| ServiceError::pet_store_not_found(id))?
            .into(),
    };
    copy_pet_store_fields(&mut store, &data);

    let saved = if data.pet_store_id.is_none() {
        store.insert(&txn).await
    } else {
        store.update(&txn).await
    }
    .map_err(|e| ServiceError::Db(e.to_string()))?;

    let employees = saved
        .find_related(employee::Entity)
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let customers = saved
        .find_related(customer::Entity)
        .all(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = saved.id, "saved pet store");
    Ok(PetStoreData::with_relations(saved, employees, customers))
}

/// Upsert an employee under a store. An existing employee must already work
/// at that store; the owning reference is never re-parented.
#[instrument(skip(db, data), fields(employee_id = ?data.employee_id))]
pub async fn save_employee(
    db: &DatabaseConnection,
    pet_store_id: i64,
    data: PetStoreEmployee,
) -> Result<PetStoreEmployee, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let store = pet_store::find_by_id(&txn, pet_store_id)
        .await?
        .ok_or_else(|| ServiceError::pet_store_not_found(pet_store_id))?;

    let mut emp = match data.employee_id {
        None => employee::ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() },
        Some(id) => {
            let existing = employee::find_by_id(&txn, id)
                .await?
                .ok_or_else(|| ServiceError::employee_not_found(id))?;
            if existing.pet_store_id != store.id {
                return Err(ServiceError::employee_not_at_store(id, store.id));
            }
            existing.into()
        }
    };
    copy_employee_fields(&mut emp, &data);
    emp.pet_store_id = Set(store.id);

    let saved = if data.employee_id.is_none() {
        emp.insert(&txn).await
    } else {
        emp.update(&txn).await
    }
    .map_err(|e| ServiceError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = saved.id, pet_store_id = store.id, "saved employee");
    Ok(PetStoreEmployee::from(saved))
}

/// Upsert a customer under a store. An existing customer must already be
/// associated with that store; the association is then refreshed with set
/// semantics, so repeated saves never duplicate it.
#[instrument(skip(db, data), fields(customer_id = ?data.customer_id))]
pub async fn save_customer(
    db: &DatabaseConnection,
    pet_store_id: i64,
    data: PetStoreCustomer,
) -> Result<PetStoreCustomer, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let store = pet_store::find_by_id(&txn, pet_store_id)
        .await?
        .ok_or_else(|| ServiceError::pet_store_not_found(pet_store_id))?;

    let mut cust = match data.customer_id {
        None => customer::ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() },
        Some(id) => {
            let existing = customer::find_by_id(&txn, id)
                .await?
                .ok_or_else(|| ServiceError::customer_not_found(id))?;
            if !pet_store_customer::is_linked(&txn, store.id, id).await? {
                return Err(ServiceError::customer_not_at_store(id, store.id));
            }
            existing.into()
        }
    };
    copy_customer_fields(&mut cust, &data);

    let saved = if data.customer_id.is_none() {
        cust.insert(&txn).await
    } else {
        cust.update(&txn).await
    }
    .map_err(|e| ServiceError::Db(e.to_string()))?;

    pet_store_customer::link(&txn, store.id, saved.id).await?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = saved.id, pet_store_id = store.id, "saved customer");
    Ok(PetStoreCustomer::from(saved))
}

/// Every store as a summary: relation collections stay cleared, so no
/// relation traversal happens here at all.
pub async fn retrieve_all_pet_stores(db: &DatabaseConnection) -> Result<Vec<PetStoreData>, ServiceError> {
    let stores = pet_store::find_all(db).await?;
    Ok(stores.into_iter().map(PetStoreData::summary).collect())
}

/// One store with both relation collections populated.
pub async fn retrieve_pet_store_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<PetStoreData, ServiceError> {
    let store = pet_store::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::pet_store_not_found(id))?;
    let employees = store
        .find_related(employee::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let customers = store
        .find_related(customer::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(PetStoreData::with_relations(store, employees, customers))
}

/// Delete a store; employees and customer associations cascade in the
/// database.
#[instrument(skip(db))]
pub async fn delete_pet_store_by_id(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let store = pet_store::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::pet_store_not_found(id))?;
    pet_store::delete_by_id(db, store.id).await?;
    info!(id, "deleted pet store");
    Ok(())
}
