use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::order::domain::{NewOrder, Order};
use crate::order::repository::OrderRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn insert(&self, order: NewOrder) -> Result<Order, ServiceError> {
        let created = models::order::create(&self.db, &order.id, order.amount).await?;
        Ok(created.into())
    }

    async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        let rows = models::order::list_all(&self.db).await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::EntityTrait;
    use uuid::Uuid;

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmOrderRepository::new(db.clone());

        let id = format!("svc_order_{}", Uuid::new_v4());
        let created = repo.insert(NewOrder { id: id.clone(), amount: 123.45 }).await?;
        assert_eq!(created, Order { id: id.clone(), amount: 123.45 });

        let listed = repo.list().await?;
        assert!(listed.contains(&created));

        let dup = repo.insert(NewOrder { id: id.clone(), amount: 1.0 }).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(ref k)) if *k == id));

        models::order::Entity::delete_by_id(id).exec(&db).await?;
        Ok(())
    }
}
