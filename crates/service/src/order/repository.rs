use async_trait::async_trait;

use super::domain::{NewOrder, Order};
use crate::errors::ServiceError;

/// Repository abstraction for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order. An existing id yields `ServiceError::Conflict`.
    async fn insert(&self, order: NewOrder) -> Result<Order, ServiceError>;
    /// Every stored order, in storage order.
    async fn list(&self) -> Result<Vec<Order>, ServiceError>;
}

/// In-memory repository for tests and for running without a database
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    /// Keeps insertion order, which stands in for "storage order".
    #[derive(Default)]
    pub struct InMemoryOrderRepository {
        orders: RwLock<Vec<Order>>,
    }

    impl InMemoryOrderRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrderRepository {
        async fn insert(&self, order: NewOrder) -> Result<Order, ServiceError> {
            let mut orders = self.orders.write().await;
            if orders.iter().any(|o| o.id == order.id) {
                return Err(ServiceError::Conflict(order.id));
            }
            let stored = Order::from(order);
            orders.push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(self.orders.read().await.clone())
        }
    }

}
