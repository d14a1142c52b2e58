//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod car_repository;
pub(crate) mod entities;

pub use car_repository::{CarRepository, CarStore};

// Shared query code, reused by the transaction-bound store
pub(crate) use car_repository::queries;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use car_repository::MockCarRepository;
