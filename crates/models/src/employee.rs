use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::pet_store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pet_store_id: i64,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PetStore,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PetStore => Entity::belongs_to(pet_store::Entity)
                .from(Column::PetStoreId)
                .to(pet_store::Column::Id)
                .into(),
        }
    }
}

impl Related<pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}
