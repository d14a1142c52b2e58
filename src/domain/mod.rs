//! Core business entities and logic.

mod car;

pub use car::{Car, CarResponse, CreateCar, EngineType};
