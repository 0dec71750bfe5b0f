//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::hotel::{Hotel, HotelRepository, NewHotel};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::hotel;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        rating: m.rating,
        country: m.country,
        city: m.city,
        address: m.address,
        manager_id: m.manager_id,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn create(&self, h: NewHotel) -> DomainResult<Hotel> {
        debug!(name = %h.name, "Creating hotel");

        let model = hotel::ActiveModel {
            id: NotSet,
            name: Set(h.name),
            rating: Set(h.rating),
            country: Set(h.country),
            city: Set(h.city),
            address: Set(h.address),
            manager_id: Set(h.manager_id),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_page(
        &self,
        page: u64,
        limit: u64,
        filter: Option<&str>,
    ) -> DomainResult<(Vec<Hotel>, u64)> {
        let mut query = hotel::Entity::find().order_by_asc(hotel::Column::Id);

        if let Some(filter) = filter {
            query = query.filter(
                Condition::any()
                    .add(hotel::Column::Name.contains(filter))
                    .add(hotel::Column::City.contains(filter)),
            );
        }

        let paginator = query.paginate(&self.db, limit);
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;

        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn update(&self, h: Hotel) -> DomainResult<()> {
        debug!(hotel_id = h.id, "Updating hotel");

        let existing = hotel::Entity::find_by_id(h.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Hotel",
                field: "id",
                value: h.id.to_string(),
            });
        }

        let model = hotel::ActiveModel {
            id: Set(h.id),
            name: Set(h.name),
            rating: Set(h.rating),
            country: Set(h.country),
            city: Set(h.city),
            address: Set(h.address),
            manager_id: Set(h.manager_id),
            created_at: Set(h.created_at),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = hotel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Hotel",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
