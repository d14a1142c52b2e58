//! Unit of Work pattern implementation.
//!
//! Wraps read-modify-write sequences in an explicit transaction scope:
//! the transaction is committed when the closure returns `Ok` and rolled
//! back on `Err`, so it is released on every exit path.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use uuid::Uuid;

use super::repositories::{queries, CarRepository, CarStore};
use crate::domain::{Car, CreateCar};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides repository access plus transaction management. Services hold
/// a concrete `U: UnitOfWork` (the trait has generic methods and cannot
/// be boxed).
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get car repository bound to the connection pool
    fn cars(&self) -> Arc<dyn CarRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The context hands out a transaction-bound repository; all
    /// operations through it belong to the same database transaction.
    /// The context must not escape the closure.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(TransactionContext) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send>>
            + Send,
        T: Send;
}

/// Repository access scoped to one transaction.
pub struct TransactionContext {
    cars: Arc<dyn CarRepository>,
}

impl TransactionContext {
    /// Create a context over any repository implementation
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }

    /// Get car repository for this transaction
    pub fn cars(&self) -> &dyn CarRepository {
        self.cars.as_ref()
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    car_repo: Arc<CarStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let car_repo = Arc::new(CarStore::new(db.clone()));
        Self { db, car_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn cars(&self) -> Arc<dyn CarRepository> {
        self.car_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(TransactionContext) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send>>
            + Send,
        T: Send,
    {
        // ReadCommitted is deliberate: concurrent selects on the same car
        // are resolved by the storage engine, not serialized here.
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let txn = Arc::new(txn);
        let ctx = TransactionContext::new(Arc::new(TxCarStore::new(txn.clone())));

        let outcome = f(ctx).await;

        // The closure's future owned the only other handle; recover the
        // transaction to commit or roll back.
        let txn = Arc::try_unwrap(txn)
            .map_err(|_| AppError::internal("transaction context escaped its scope"))?;

        match outcome {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound car repository.
///
/// Executes all operations on the shared transaction handle.
pub struct TxCarStore {
    txn: Arc<DatabaseTransaction>,
}

impl TxCarStore {
    fn new(txn: Arc<DatabaseTransaction>) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl CarRepository for TxCarStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        queries::find_by_id(self.txn.as_ref(), id).await
    }

    async fn find_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>> {
        queries::find_by_availability(self.txn.as_ref(), is_available).await
    }

    async fn create(&self, data: CreateCar) -> AppResult<Car> {
        queries::insert(self.txn.as_ref(), data).await
    }

    async fn update(&self, car: &Car) -> AppResult<Car> {
        queries::update(self.txn.as_ref(), car).await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
