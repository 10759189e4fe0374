use sea_orm::{entity::prelude::*, DatabaseConnection, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one order inside its own transaction.
/// A primary-key clash comes back as `ModelError::Duplicate(id)`.
pub async fn create(db: &DatabaseConnection, id: &str, amount: f64) -> Result<Model, ModelError> {
    let txn = db.begin().await?;
    let am = ActiveModel {
        id: Set(id.to_string()),
        amount: Set(amount),
    };
    let inserted = am.insert(&txn).await.map_err(|e| ModelError::from_db(e, id))?;
    txn.commit().await?;
    Ok(inserted)
}

/// Full-table scan; row order is whatever the database returns.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

/// Point lookup by id; the API never reads single orders, this backs persistence checks.
pub async fn find(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}
