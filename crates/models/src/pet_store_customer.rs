use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{customer, pet_store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store_customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_store_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PetStore,
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PetStore => Entity::belongs_to(pet_store::Entity)
                .from(Column::PetStoreId)
                .to(pet_store::Column::Id)
                .into(),
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Membership test for the store/customer association.
pub async fn is_linked<C: ConnectionTrait>(
    conn: &C,
    pet_store_id: i64,
    customer_id: i64,
) -> Result<bool, ModelError> {
    let found = Entity::find_by_id((pet_store_id, customer_id))
        .one(conn)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}

/// Link a customer to a store. Set semantics: linking an already linked
/// pair is a no-op.
pub async fn link<C: ConnectionTrait>(
    conn: &C,
    pet_store_id: i64,
    customer_id: i64,
) -> Result<(), ModelError> {
    let am = ActiveModel { pet_store_id: Set(pet_store_id), customer_id: Set(customer_id) };
    Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::PetStoreId, Column::CustomerId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}
