//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::room::{NewRoom, Room, RoomFilter, RoomRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.name,
        price: m.price,
        hotel_id: m.hotel_id,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, r: NewRoom) -> DomainResult<Room> {
        debug!(name = %r.name, hotel_id = r.hotel_id, "Creating room");

        let model = room::ActiveModel {
            id: NotSet,
            name: Set(r.name),
            price: Set(r.price),
            hotel_id: Set(r.hotel_id),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_filtered(&self, filter: &RoomFilter) -> DomainResult<Vec<Room>> {
        let mut query = room::Entity::find().order_by_asc(room::Column::Id);

        if let Some(hotel_id) = filter.hotel_id {
            query = query.filter(room::Column::HotelId.eq(hotel_id));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(room::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(room::Column::Price.lte(max_price));
        }

        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .order_by_asc(room::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn count_for_hotel(&self, hotel_id: i32) -> DomainResult<u64> {
        room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update(&self, r: Room) -> DomainResult<()> {
        debug!(room_id = r.id, "Updating room");

        let existing = room::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: r.id.to_string(),
            });
        }

        let model = room::ActiveModel {
            id: Set(r.id),
            name: Set(r.name),
            price: Set(r.price),
            hotel_id: Set(r.hotel_id),
            created_at: Set(r.created_at),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
