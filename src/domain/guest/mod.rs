//! Guest aggregate
//!
//! Guests double as the service's user accounts: they carry the password
//! hash and role used by the auth layer.

pub mod model;
pub mod repository;

pub use model::{Guest, UserRole};
pub use repository::GuestRepository;
