//! Order module: domain, repository, service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewOrder, Order, ValidationError};
pub use repository::OrderRepository;
pub use service::OrderService;
