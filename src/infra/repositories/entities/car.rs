//! Car database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Car, EngineType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub license_plate: String,
    pub seat_count: i16,
    pub convertible: bool,
    pub rating: Option<f64>,
    pub engine_type: String,
    pub manufacturer: Option<String>,
    /// `false` = currently assigned to a driver
    pub is_available: bool,
    /// Soft delete marker (record stays in storage)
    pub deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Car {
    fn from(model: Model) -> Self {
        Car {
            id: model.id,
            license_plate: model.license_plate,
            seat_count: model.seat_count,
            convertible: model.convertible,
            rating: model.rating,
            engine_type: EngineType::from(model.engine_type.as_str()),
            manufacturer: model.manufacturer,
            is_available: model.is_available,
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
