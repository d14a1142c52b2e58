//! Car service - Handles car-related business logic.
//!
//! Orchestrates domain operations via Unit of Work: every
//! read-modify-write sequence runs inside one transaction scope.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Car, CreateCar};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Car service trait for dependency injection.
///
/// Lookups do not exclude soft-deleted cars; a deleted car stays
/// retrievable by id.
#[async_trait]
pub trait CarService: Send + Sync {
    /// Get car by ID
    async fn find_car(&self, id: Uuid) -> AppResult<Car>;

    /// Register a new car in the fleet
    async fn create_car(&self, data: CreateCar) -> AppResult<Car>;

    /// Soft delete a car (sets the deleted flag)
    async fn delete_car(&self, id: Uuid) -> AppResult<()>;

    /// Mark a car as assigned to a driver
    async fn select_car(&self, id: Uuid) -> AppResult<()>;

    /// Release a car back into the available pool
    async fn deselect_car(&self, id: Uuid) -> AppResult<()>;

    /// List all cars matching the given availability flag
    async fn find_cars_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>>;
}

/// Concrete implementation of CarService using Unit of Work.
pub struct CarManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CarManager<U> {
    /// Create new car service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CarService for CarManager<U> {
    async fn find_car(&self, id: Uuid) -> AppResult<Car> {
        self.uow
            .cars()
            .find_by_id(id)
            .await?
            .ok_or(AppError::EntityNotFound(id))
    }

    async fn create_car(&self, data: CreateCar) -> AppResult<Car> {
        match self.uow.cars().create(data).await {
            Err(AppError::ConstraintsViolation(message)) => {
                tracing::warn!(%message, "car creation rejected by a storage constraint");
                Err(AppError::ConstraintsViolation(message))
            }
            other => other,
        }
    }

    async fn delete_car(&self, id: Uuid) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let mut car = ctx
                .cars()
                .find_by_id(id)
                .await?
                .ok_or(AppError::EntityNotFound(id))?;

            car.mark_deleted();
            ctx.cars().update(&car).await?;
            Ok(())
        })
    }

    async fn select_car(&self, id: Uuid) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let mut car = ctx
                .cars()
                .find_by_id(id)
                .await?
                .ok_or(AppError::EntityNotFound(id))?;

            if car.is_in_use() {
                return Err(AppError::CarAlreadyInUse(id));
            }

            car.assign();
            ctx.cars().update(&car).await?;
            Ok(())
        })
    }

    async fn deselect_car(&self, id: Uuid) -> AppResult<()> {
        // No current-state check: releasing is idempotent
        with_transaction!(self.uow, |ctx| {
            let mut car = ctx
                .cars()
                .find_by_id(id)
                .await?
                .ok_or(AppError::EntityNotFound(id))?;

            car.release();
            ctx.cars().update(&car).await?;
            Ok(())
        })
    }

    async fn find_cars_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>> {
        self.uow.cars().find_by_availability(is_available).await
    }
}
