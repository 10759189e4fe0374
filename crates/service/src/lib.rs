//! Service layer for orders.
//! - Decodes raw JSON input into typed domain values before anything touches storage.
//! - Hides persistence behind `OrderRepository` (SeaORM or in-memory).
//! - Maps model errors into `ServiceError` for the HTTP layer.

pub mod errors;
pub mod order;
#[cfg(test)]
pub mod test_support;
