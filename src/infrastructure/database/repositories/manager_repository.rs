//! SeaORM implementation of ManagerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::domain::manager::{Manager, ManagerRepository, NewManager};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::manager;

pub struct SeaOrmManagerRepository {
    db: DatabaseConnection,
}

impl SeaOrmManagerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: manager::Model) -> Manager {
    Manager {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        personal_number: m.personal_number,
        email: m.email,
        phone_number: m.phone_number,
        hotel_id: m.hotel_id,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl ManagerRepository for SeaOrmManagerRepository {
    async fn create(&self, m: NewManager) -> DomainResult<Manager> {
        debug!(email = %m.email, "Creating manager");

        let email = m.email.clone();
        let model = manager::ActiveModel {
            id: NotSet,
            first_name: Set(m.first_name),
            last_name: Set(m.last_name),
            personal_number: Set(m.personal_number),
            email: Set(m.email),
            phone_number: Set(m.phone_number),
            hotel_id: Set(m.hotel_id),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Conflict(format!("manager with email {}", email))
            } else {
                db_err(e)
            }
        })?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Manager>> {
        let model = manager::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Manager>> {
        let model = manager::Entity::find()
            .filter(manager::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_personal_number(
        &self,
        personal_number: &str,
    ) -> DomainResult<Option<Manager>> {
        let model = manager::Entity::find()
            .filter(manager::Column::PersonalNumber.eq(personal_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Manager>> {
        let models = manager::Entity::find()
            .order_by_asc(manager::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, m: Manager) -> DomainResult<()> {
        debug!(manager_id = m.id, "Updating manager");

        let existing = manager::Entity::find_by_id(m.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Manager",
                field: "id",
                value: m.id.to_string(),
            });
        }

        let model = manager::ActiveModel {
            id: Set(m.id),
            first_name: Set(m.first_name),
            last_name: Set(m.last_name),
            personal_number: Set(m.personal_number),
            email: Set(m.email),
            phone_number: Set(m.phone_number),
            hotel_id: Set(m.hotel_id),
            created_at: Set(m.created_at),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = manager::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Manager",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
