//! Car domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ENGINE_ELECTRIC, ENGINE_GAS, ENGINE_HYBRID};

/// Engine types a car can be registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Gas,
    Electric,
    Hybrid,
}

impl From<&str> for EngineType {
    fn from(s: &str) -> Self {
        match s {
            ENGINE_ELECTRIC => EngineType::Electric,
            ENGINE_HYBRID => EngineType::Hybrid,
            _ => EngineType::Gas,
        }
    }
}

impl From<EngineType> for String {
    fn from(engine_type: EngineType) -> Self {
        engine_type.to_string()
    }
}

impl std::fmt::Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineType::Gas => write!(f, "{}", ENGINE_GAS),
            EngineType::Electric => write!(f, "{}", ENGINE_ELECTRIC),
            EngineType::Hybrid => write!(f, "{}", ENGINE_HYBRID),
        }
    }
}

/// Car domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub license_plate: String,
    pub seat_count: i16,
    pub convertible: bool,
    pub rating: Option<f64>,
    pub engine_type: EngineType,
    pub manufacturer: Option<String>,
    /// `false` means the car is currently assigned to a driver
    pub is_available: bool,
    /// Soft delete marker; deleted cars stay in storage
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Check if the car is currently assigned to a driver
    pub fn is_in_use(&self) -> bool {
        !self.is_available
    }

    /// Mark the car as assigned to a driver
    pub fn assign(&mut self) {
        self.is_available = false;
        self.updated_at = Utc::now();
    }

    /// Release the car back into the available pool
    pub fn release(&mut self) {
        self.is_available = true;
        self.updated_at = Utc::now();
    }

    /// Soft delete the car
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }
}

/// Car creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCar {
    /// License plate, unique across the fleet
    #[schema(example = "B-FL 8213")]
    pub license_plate: String,
    /// Number of passenger seats
    #[schema(example = 4)]
    pub seat_count: i16,
    /// Whether the car is a convertible
    pub convertible: bool,
    /// Driver-facing rating between 0 and 5
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    /// Engine type
    pub engine_type: EngineType,
    /// Manufacturer name
    #[schema(example = "Toyota")]
    pub manufacturer: Option<String>,
}

/// Car response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CarResponse {
    /// Unique car identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// License plate
    #[schema(example = "B-FL 8213")]
    pub license_plate: String,
    /// Number of passenger seats
    #[schema(example = 4)]
    pub seat_count: i16,
    /// Whether the car is a convertible
    pub convertible: bool,
    /// Driver-facing rating between 0 and 5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Engine type
    pub engine_type: EngineType,
    /// Manufacturer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Whether the car can currently be assigned to a driver
    pub is_available: bool,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            license_plate: car.license_plate,
            seat_count: car.seat_count,
            convertible: car.convertible,
            rating: car.rating,
            engine_type: car.engine_type,
            manufacturer: car.manufacturer,
            is_available: car.is_available,
            created_at: car.created_at,
        }
    }
}
