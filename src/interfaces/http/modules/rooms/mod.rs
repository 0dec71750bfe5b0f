//! Room CRUD and availability search module.

pub mod dto;
pub mod handlers;

pub use handlers::RoomAppState;
