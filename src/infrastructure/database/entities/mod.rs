//! SeaORM entity definitions

pub mod guest;
pub mod hotel;
pub mod manager;
pub mod reservation;
pub mod room;
