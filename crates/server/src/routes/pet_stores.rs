use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::domain::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
use service::pet_store_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/pet_store", tag = "pet_store",
    request_body = crate::openapi::PetStoreDataDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 404, description = "Referenced store id not found"),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<PetStoreData>,
) -> Result<(StatusCode, Json<PetStoreData>), ApiError> {
    info!(pet_store_id = ?data.pet_store_id, "creating pet store");
    let saved = pet_store_service::save_pet_store(&state.db, data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/pet_store/{pet_store_id}", tag = "pet_store",
    params(("pet_store_id" = i64, Path, description = "Pet store ID")),
    request_body = crate::openapi::PetStoreDataDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(pet_store_id): Path<i64>,
    Json(mut data): Json<PetStoreData>,
) -> Result<Json<PetStoreData>, ApiError> {
    // The path id wins over whatever the body carries
    data.pet_store_id = Some(pet_store_id);
    info!(pet_store_id, "updating pet store");
    let saved = pet_store_service::save_pet_store(&state.db, data).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post, path = "/pet_store/{pet_store_id}/employee", tag = "pet_store",
    params(("pet_store_id" = i64, Path, description = "Pet store ID")),
    request_body = crate::openapi::PetStoreEmployeeDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Employee does not work at this store"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create_employee(
    State(state): State<ServerState>,
    Path(pet_store_id): Path<i64>,
    Json(data): Json<PetStoreEmployee>,
) -> Result<(StatusCode, Json<PetStoreEmployee>), ApiError> {
    info!(pet_store_id, employee_id = ?data.employee_id, "creating employee");
    let saved = pet_store_service::save_employee(&state.db, pet_store_id, data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    post, path = "/pet_store/{pet_store_id}/customer", tag = "pet_store",
    params(("pet_store_id" = i64, Path, description = "Pet store ID")),
    request_body = crate::openapi::PetStoreCustomerDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Customer does not shop at this store"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    Path(pet_store_id): Path<i64>,
    Json(data): Json<PetStoreCustomer>,
) -> Result<(StatusCode, Json<PetStoreCustomer>), ApiError> {
    info!(pet_store_id, customer_id = ?data.customer_id, "creating customer");
    let saved = pet_store_service::save_customer(&state.db, pet_store_id, data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get, path = "/pet_store", tag = "pet_store",
    responses((status = 200, description = "List of store summaries, relations cleared"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PetStoreData>>, ApiError> {
    let stores = pet_store_service::retrieve_all_pet_stores(&state.db).await?;
    info!(count = stores.len(), "listed pet stores");
    Ok(Json(stores))
}

#[utoipa::path(
    get, path = "/pet_store/{pet_store_id}", tag = "pet_store",
    params(("pet_store_id" = i64, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "Full record with relations"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(pet_store_id): Path<i64>,
) -> Result<Json<PetStoreData>, ApiError> {
    info!(pet_store_id, "retrieving pet store");
    let store = pet_store_service::retrieve_pet_store_by_id(&state.db, pet_store_id).await?;
    Ok(Json(store))
}

#[utoipa::path(
    delete, path = "/pet_store/{pet_store_id}", tag = "pet_store",
    params(("pet_store_id" = i64, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(pet_store_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(pet_store_id, "deleting pet store");
    pet_store_service::delete_pet_store_by_id(&state.db, pet_store_id).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Deletion of pet store with ID={pet_store_id} was successful.")
    })))
}
