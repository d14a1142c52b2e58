//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CarService, ServiceContainer, Services};

/// Application state containing all services (DI container).
///
/// Use `from_database()` for recommended initialization with full
/// ServiceContainer and UnitOfWork support.
#[derive(Clone)]
pub struct AppState {
    /// Car service
    pub car_service: Arc<dyn CarService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Internal service container (optional, only with from_database)
    service_container: Option<Arc<Services>>,
}

impl AppState {
    /// Create application state from a database handle.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Arc::new(Services::from_connection(database.get_connection()));

        Self {
            car_service: container.cars(),
            database,
            service_container: Some(container),
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Note: This method does not provide ServiceContainer access.
    /// Use `from_database()` for full functionality.
    pub fn new(car_service: Arc<dyn CarService>, database: Arc<Database>) -> Self {
        Self {
            car_service,
            database,
            service_container: None,
        }
    }

    /// Get the service container for centralized service access.
    ///
    /// Returns `Some` only if created via `from_database()`.
    pub fn services(&self) -> Option<&Arc<Services>> {
        self.service_container.as_ref()
    }
}
