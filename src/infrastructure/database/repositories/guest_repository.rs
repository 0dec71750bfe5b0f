//! SeaORM implementation of GuestRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::guest::{Guest, GuestRepository, UserRole};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::guest;

pub struct SeaOrmGuestRepository {
    db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: guest::Model) -> Guest {
    Guest {
        id: m.id,
        email: m.email,
        first_name: m.first_name,
        last_name: m.last_name,
        personal_number: m.personal_number,
        phone_number: m.phone_number,
        password_hash: m.password_hash,
        role: UserRole::from_str(&m.role),
        is_active: m.is_active,
        created_at: m.created_at,
        last_login_at: m.last_login_at,
    }
}

fn domain_to_active(g: Guest) -> guest::ActiveModel {
    guest::ActiveModel {
        id: Set(g.id),
        email: Set(g.email),
        first_name: Set(g.first_name),
        last_name: Set(g.last_name),
        personal_number: Set(g.personal_number),
        phone_number: Set(g.phone_number),
        password_hash: Set(g.password_hash),
        role: Set(g.role.as_str().to_string()),
        is_active: Set(g.is_active),
        created_at: Set(g.created_at),
        last_login_at: Set(g.last_login_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn insert(&self, g: Guest) -> DomainResult<()> {
        debug!(guest_id = %g.id, email = %g.email, "Inserting guest");

        let email = g.email.clone();
        domain_to_active(g).insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Conflict(format!("guest with email {}", email))
            } else {
                db_err(e)
            }
        })?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find()
            .filter(guest::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_personal_number(
        &self,
        personal_number: &str,
    ) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find()
            .filter(guest::Column::PersonalNumber.eq(personal_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let models = guest::Entity::find()
            .order_by_asc(guest::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, g: Guest) -> DomainResult<()> {
        debug!(guest_id = %g.id, "Updating guest");

        let existing = guest::Entity::find_by_id(g.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Guest",
                field: "id",
                value: g.id.clone(),
            });
        }

        domain_to_active(g).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = guest::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Guest",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn record_login(&self, id: &str, at: DateTime<Utc>) -> DomainResult<()> {
        let existing = guest::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Guest",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: guest::ActiveModel = existing.into();
        active.last_login_at = Set(Some(at));
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
