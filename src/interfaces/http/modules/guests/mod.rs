//! Guest account administration module.

pub mod dto;
pub mod handlers;

pub use handlers::GuestAppState;
