//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod car;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use car::{ActiveModel as CarActiveModel, Entity as CarEntity, Model as CarModel};
