//! Manager repository interface

use async_trait::async_trait;

use super::model::{Manager, NewManager};
use crate::domain::DomainResult;

#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Persist a new manager and return it with its assigned id
    async fn create(&self, manager: NewManager) -> DomainResult<Manager>;

    /// Find manager by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Manager>>;

    /// Find manager by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Manager>>;

    /// Find manager by personal number
    async fn find_by_personal_number(&self, personal_number: &str)
        -> DomainResult<Option<Manager>>;

    /// All managers
    async fn find_all(&self) -> DomainResult<Vec<Manager>>;

    /// Update an existing manager
    async fn update(&self, manager: Manager) -> DomainResult<()>;

    /// Delete a manager by ID
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
