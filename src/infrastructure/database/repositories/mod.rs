//! SeaORM repository implementations

pub mod guest_repository;
pub mod hotel_repository;
pub mod manager_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
