//! Wire-facing representations of the pet store aggregate.
//!
//! Field copies are full overwrites: a field absent from the inbound payload
//! clears the corresponding column.
use models::{customer, employee, pet_store};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreData {
    pub pet_store_id: Option<i64>,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    pub employees: Vec<PetStoreEmployee>,
    pub customers: Vec<PetStoreCustomer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreEmployee {
    pub employee_id: Option<i64>,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreCustomer {
    pub customer_id: Option<i64>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

impl From<pet_store::Model> for PetStoreData {
    fn from(m: pet_store::Model) -> Self {
        Self {
            pet_store_id: Some(m.id),
            pet_store_name: m.pet_store_name,
            pet_store_address: m.pet_store_address,
            pet_store_city: m.pet_store_city,
            pet_store_state: m.pet_store_state,
            pet_store_zip: m.pet_store_zip,
            pet_store_phone: m.pet_store_phone,
            employees: Vec::new(),
            customers: Vec::new(),
        }
    }
}

impl From<employee::Model> for PetStoreEmployee {
    fn from(m: employee::Model) -> Self {
        Self {
            employee_id: Some(m.id),
            employee_first_name: m.employee_first_name,
            employee_last_name: m.employee_last_name,
            employee_phone: m.employee_phone,
            employee_job_title: m.employee_job_title,
        }
    }
}

impl From<customer::Model> for PetStoreCustomer {
    fn from(m: customer::Model) -> Self {
        Self {
            customer_id: Some(m.id),
            customer_first_name: m.customer_first_name,
            customer_last_name: m.customer_last_name,
            customer_email: m.customer_email,
        }
    }
}

impl PetStoreData {
    /// Summary view for list responses: relation collections stay cleared.
    pub fn summary(store: pet_store::Model) -> Self {
        Self::from(store)
    }

    /// Full view with both relation collections populated.
    pub fn with_relations(
        store: pet_store::Model,
        employees: Vec<employee::Model>,
        customers: Vec<customer::Model>,
    ) -> Self {
        let mut data = Self::from(store);
        data.employees = employees.into_iter().map(Into::into).collect();
        data.customers = customers.into_iter().map(Into::into).collect();
        data
    }
}

pub fn copy_pet_store_fields(store: &mut pet_store::ActiveModel, data: &PetStoreData) {
    store.pet_store_name = Set(data.pet_store_name.clone());
    store.pet_store_address = Set(data.pet_store_address.clone());
    store.pet_store_city = Set(data.pet_store_city.clone());
    store.pet_store_state = Set(data.pet_store_state.clone());
    store.pet_store_zip = Set(data.pet_store_zip.clone());
    store.pet_store_phone = Set(data.pet_store_phone.clone());
}

pub fn copy_employee_fields(emp: &mut employee::ActiveModel, data: &PetStoreEmployee) {
    emp.employee_first_name = Set(data.employee_first_name.clone());
    emp.employee_last_name = Set(data.employee_last_name.clone());
    emp.employee_phone = Set(data.employee_phone.clone());
    emp.employee_job_title = Set(data.employee_job_title.clone());
}

pub fn copy_customer_fields(cust: &mut customer::ActiveModel, data: &PetStoreCustomer) {
    cust.customer_first_name = Set(data.customer_first_name.clone());
    cust.customer_last_name = Set(data.customer_last_name.clone());
    cust.customer_email = Set(data.customer_email.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn sample_store() -> pet_store::Model {
        pet_store::Model {
            id: 7,
            pet_store_name: Some("Aquarium".into()),
            pet_store_address: Some("1 Main St".into()),
            pet_store_city: Some("Springfield".into()),
            pet_store_state: None,
            pet_store_zip: None,
            pet_store_phone: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let data = PetStoreData::from(sample_store());
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["petStoreId"], 7);
        assert_eq!(value["petStoreName"], "Aquarium");
        assert!(value["employees"].as_array().unwrap().is_empty());
        assert!(value["customers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn sparse_payload_deserializes() {
        let data: PetStoreData = serde_json::from_value(json!({"petStoreName": "Aquarium"})).unwrap();
        assert_eq!(data.pet_store_id, None);
        assert_eq!(data.pet_store_name.as_deref(), Some("Aquarium"));
        assert!(data.employees.is_empty());

        let emp: PetStoreEmployee = serde_json::from_value(json!({"employeeFirstName": "Jo"})).unwrap();
        assert_eq!(emp.employee_id, None);
        assert_eq!(emp.employee_first_name.as_deref(), Some("Jo"));
    }

    #[test]
    fn copy_overwrites_and_clears_absent_fields() {
        let mut am: pet_store::ActiveModel = sample_store().into();
        let payload = PetStoreData {
            pet_store_name: Some("Reef World".into()),
            ..Default::default()
        };
        copy_pet_store_fields(&mut am, &payload);
        assert_eq!(am.pet_store_name.clone().unwrap(), Some("Reef World".into()));
        // Fields absent from the payload end up cleared, not preserved
        assert_eq!(am.pet_store_address.clone().unwrap(), None);
        assert_eq!(am.pet_store_city.clone().unwrap(), None);
    }

    #[test]
    fn copy_employee_never_touches_ownership() {
        let mut am = employee::ActiveModel::default();
        let payload = PetStoreEmployee {
            employee_first_name: Some("Jo".into()),
            employee_job_title: Some("Groomer".into()),
            ..Default::default()
        };
        copy_employee_fields(&mut am, &payload);
        assert_eq!(am.employee_first_name.clone().unwrap(), Some("Jo".into()));
        assert!(am.pet_store_id.is_not_set());
        assert!(am.id.is_not_set());
    }

    #[test]
    fn summary_clears_relations() {
        let employees = vec![employee::Model {
            id: 1,
            pet_store_id: 7,
            employee_first_name: Some("Jo".into()),
            employee_last_name: None,
            employee_phone: None,
            employee_job_title: None,
            created_at: Utc::now().into(),
        }];
        let full = PetStoreData::with_relations(sample_store(), employees, Vec::new());
        assert_eq!(full.employees.len(), 1);

        let summary = PetStoreData::summary(sample_store());
        assert!(summary.employees.is_empty());
        assert!(summary.customers.is_empty());
    }
}
