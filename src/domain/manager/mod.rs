//! Manager aggregate

pub mod model;
pub mod repository;

pub use model::{Manager, NewManager};
pub use repository::ManagerRepository;
