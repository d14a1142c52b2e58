//! Migration: Index the availability flag on the cars table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Availability listings filter on this flag
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_is_available")
                    .table(Cars::Table)
                    .col(Cars::IsAvailable)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cars_is_available")
                    .table(Cars::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Cars {
    Table,
    IsAvailable,
}
