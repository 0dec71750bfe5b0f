//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_hotels;
mod m20250601_000002_create_rooms;
mod m20250601_000003_create_guests;
mod m20250601_000004_create_managers;
mod m20250601_000005_create_reservations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_hotels::Migration),
            Box::new(m20250601_000002_create_rooms::Migration),
            Box::new(m20250601_000003_create_guests::Migration),
            Box::new(m20250601_000004_create_managers::Migration),
            Box::new(m20250601_000005_create_reservations::Migration),
        ]
    }
}
