pub use sea_orm_migration::prelude::*;

mod m20251101_000001_ar_model;
mod m20251101_000002_ar_equipment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_ar_model::Migration),
            Box::new(m20251101_000002_ar_equipment::Migration),
        ]
    }
}
