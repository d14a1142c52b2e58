//! Car repository implementation.
//!
//! Lookups deliberately do not filter on the soft delete flag; deleted
//! cars stay retrievable by id and keep showing up in availability
//! listings until callers decide otherwise.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::domain::{Car, CreateCar};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Car repository trait for dependency injection.
///
/// Pluggable storage contract: point lookup, insert, field update and
/// a predicate-based list query, independent of the storage engine.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find a car by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>>;

    /// List all cars matching the given availability flag
    async fn find_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>>;

    /// Insert a new car; integrity constraint failures surface as
    /// `AppError::ConstraintsViolation`
    async fn create(&self, data: CreateCar) -> AppResult<Car>;

    /// Persist the entity's current field values
    async fn update(&self, car: &Car) -> AppResult<Car>;
}

/// Concrete implementation of CarRepository over a pooled connection
pub struct CarStore {
    db: DatabaseConnection,
}

impl CarStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRepository for CarStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>> {
        queries::find_by_availability(&self.db, is_available).await
    }

    async fn create(&self, data: CreateCar) -> AppResult<Car> {
        queries::insert(&self.db, data).await
    }

    async fn update(&self, car: &Car) -> AppResult<Car> {
        queries::update(&self.db, car).await
    }
}

/// Query implementations shared between the pooled store and the
/// transaction-bound store in the unit of work.
pub(crate) mod queries {
    use chrono::Utc;
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
    use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
    use sea_orm::{DbErr, SqlErr};
    use uuid::Uuid;

    use super::super::entities::car::{self, ActiveModel, Entity as CarEntity};
    use crate::domain::{Car, CreateCar};
    use crate::errors::{AppError, AppResult};

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<Car>> {
        let result = CarEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Car::from))
    }

    pub async fn find_by_availability<C: ConnectionTrait>(
        conn: &C,
        is_available: bool,
    ) -> AppResult<Vec<Car>> {
        let models = CarEntity::find()
            .filter(car::Column::IsAvailable.eq(is_available))
            .all(conn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Car::from).collect())
    }

    pub async fn insert<C: ConnectionTrait>(conn: &C, data: CreateCar) -> AppResult<Car> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            license_plate: Set(data.license_plate),
            seat_count: Set(data.seat_count),
            convertible: Set(data.convertible),
            rating: Set(data.rating),
            engine_type: Set(data.engine_type.to_string()),
            manufacturer: Set(data.manufacturer),
            is_available: Set(true),
            deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(conn)
            .await
            .map_err(into_constraint_error)?;

        Ok(Car::from(model))
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, car: &Car) -> AppResult<Car> {
        let active = ActiveModel {
            id: Unchanged(car.id),
            license_plate: Set(car.license_plate.clone()),
            seat_count: Set(car.seat_count),
            convertible: Set(car.convertible),
            rating: Set(car.rating),
            engine_type: Set(car.engine_type.to_string()),
            manufacturer: Set(car.manufacturer.clone()),
            is_available: Set(car.is_available),
            deleted: Set(car.deleted),
            created_at: NotSet,
            updated_at: Set(car.updated_at),
        };

        let model = active.update(conn).await.map_err(AppError::from)?;

        Ok(Car::from(model))
    }

    /// Catch-and-wrap step converting a storage integrity error into a
    /// domain error carrying the original message.
    fn into_constraint_error(err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                AppError::ConstraintsViolation(message)
            }
            _ => AppError::Database(err),
        }
    }
}
