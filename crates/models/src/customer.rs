use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{pet_store, pet_store_customer};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no direct relations; stores are reached via pet_store_customer")
    }
}

impl Related<pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        pet_store_customer::Relation::PetStore.def()
    }
    fn via() -> Option<RelationDef> {
        Some(pet_store_customer::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}
