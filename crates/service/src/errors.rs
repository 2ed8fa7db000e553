use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidAssociation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn pet_store_not_found(id: i64) -> Self {
        Self::NotFound(format!("Pet store with ID={id} was not found."))
    }

    pub fn employee_not_found(id: i64) -> Self {
        Self::NotFound(format!("Employee with ID={id} was not found."))
    }

    pub fn customer_not_found(id: i64) -> Self {
        Self::NotFound(format!("Customer with ID={id} was not found."))
    }

    pub fn employee_not_at_store(employee_id: i64, pet_store_id: i64) -> Self {
        Self::InvalidAssociation(format!(
            "Employee with ID={employee_id} does not work at pet store with ID={pet_store_id}."
        ))
    }

    pub fn customer_not_at_store(customer_id: i64, pet_store_id: i64) -> Self {
        Self::InvalidAssociation(format!(
            "Customer with ID={customer_id} does not shop at pet store with ID={pet_store_id}."
        ))
    }
}
