use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{customer, employee, pet_store_customer};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::has_many(employee::Entity).into(),
        }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef {
        pet_store_customer::Relation::Customer.def()
    }
    fn via() -> Option<RelationDef> {
        Some(pet_store_customer::Relation::PetStore.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Delete by id; returns true if a row was removed. Employees and
/// association rows go with it via FK cascade.
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(conn).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
