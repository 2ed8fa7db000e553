use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct PetStoreEmployeeDoc {
    pub employee_id: Option<i64>,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
}

#[derive(ToSchema)]
pub struct PetStoreCustomerDoc {
    pub customer_id: Option<i64>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(ToSchema)]
pub struct PetStoreDataDoc {
    pub pet_store_id: Option<i64>,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    pub employees: Vec<PetStoreEmployeeDoc>,
    pub customers: Vec<PetStoreCustomerDoc>,
}

#[derive(ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pet_stores::create,
        crate::routes::pet_stores::update,
        crate::routes::pet_stores::create_employee,
        crate::routes::pet_stores::create_customer,
        crate::routes::pet_stores::list,
        crate::routes::pet_stores::get,
        crate::routes::pet_stores::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PetStoreDataDoc,
            PetStoreEmployeeDoc,
            PetStoreCustomerDoc,
            MessageResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "pet_store")
    )
)]
pub struct ApiDoc;
