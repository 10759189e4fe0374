use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{NewOrder, Order};
use super::repository::OrderRepository;
use crate::errors::ServiceError;

/// Order business service independent of web framework
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self { Self { repo } }

    /// Persist a decoded order and return it as stored.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::order::{repository::memory::InMemoryOrderRepository, NewOrder, OrderService};
    /// let svc = OrderService::new(Arc::new(InMemoryOrderRepository::new()));
    /// let order = tokio_test::block_on(svc.create(NewOrder { id: "order1".into(), amount: 123.45 })).unwrap();
    /// assert_eq!(order.amount, 123.45);
    /// ```
    #[instrument(skip(self, input), fields(order_id = %input.id))]
    pub async fn create(&self, input: NewOrder) -> Result<Order, ServiceError> {
        match self.repo.insert(input).await {
            Ok(order) => {
                info!(order_id = %order.id, amount = order.amount, "order_created");
                Ok(order)
            }
            Err(ServiceError::Conflict(id)) => {
                warn!(order_id = %id, "order_id_conflict");
                Err(ServiceError::Conflict(id))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::repository::memory::InMemoryOrderRepository;

    fn svc() -> OrderService {
        OrderService::new(Arc::new(InMemoryOrderRepository::new()))
    }

    #[tokio::test]
    async fn create_echoes_input() {
        let s = svc();
        let o = s.create(NewOrder { id: "order1".into(), amount: 123.45 }).await.unwrap();
        assert_eq!(o, Order { id: "order1".into(), amount: 123.45 });
        assert_eq!(s.list().await.unwrap(), vec![o]);
    }

    #[tokio::test]
    async fn empty_list() {
        assert!(svc().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn conflict_propagates() {
        let s = svc();
        s.create(NewOrder { id: "x".into(), amount: 1.0 }).await.unwrap();
        let err = s.create(NewOrder { id: "x".into(), amount: 2.0 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn clones_share_repository() {
        let a = svc();
        let b = a.clone();
        a.create(NewOrder { id: "shared".into(), amount: 5.0 }).await.unwrap();
        assert_eq!(b.list().await.unwrap().len(), 1);
    }
}
