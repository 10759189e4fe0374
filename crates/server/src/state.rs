use std::sync::Arc;

use service::order::{repository::memory::InMemoryOrderRepository, OrderRepository, OrderService};

/// Shared handler context, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }

    pub fn with_repository(repo: Arc<dyn OrderRepository>) -> Self {
        Self::new(OrderService::new(repo))
    }

    /// State backed by a process-local store; nothing survives a restart.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryOrderRepository::new()))
    }
}
