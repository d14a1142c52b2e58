//! Service Container - Centralized service access.
//!
//! Manages service lifecycle; depends on service traits, not
//! implementations.

use std::sync::Arc;

use super::CarService;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get car service
    fn cars(&self) -> Arc<dyn CarService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    car_service: Arc<dyn CarService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(car_service: Arc<dyn CarService>) -> Self {
        Self { car_service }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::CarManager;

        let uow = Arc::new(Persistence::new(db));
        let car_service = Arc::new(CarManager::new(uow));

        Self { car_service }
    }
}

impl ServiceContainer for Services {
    fn cars(&self) -> Arc<dyn CarService> {
        self.car_service.clone()
    }
}
