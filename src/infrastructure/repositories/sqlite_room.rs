use crate::domain::errors::{DomainError, DomainResult, Resource};
use crate::domain::id::EntityId;
use crate::domain::room::{
    Capacity, Price, ROOM_NUMBER_UNIQUE, Room, RoomFilter, RoomId, RoomNumber, RoomRepository,
    RoomType,
};
use crate::infrastructure::repositories::error::{corrupt_row, map_sqlx, map_write};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ROOM_COLUMNS: &str = "id, number, room_type, price, capacity, floor, amenities, description, is_available, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteRoomRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRoomRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoomRow {
    id: String,
    number: String,
    room_type: String,
    price: f64,
    capacity: i64,
    floor: Option<i64>,
    amenities: String,
    description: Option<String>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            id: RoomId::parse(&row.id).map_err(corrupt_row)?,
            number: RoomNumber::new(row.number).map_err(corrupt_row)?,
            room_type: RoomType::parse(&row.room_type).map_err(corrupt_row)?,
            price: Price::new(row.price).map_err(corrupt_row)?,
            capacity: Capacity::new(row.capacity).map_err(corrupt_row)?,
            floor: row
                .floor
                .map(i32::try_from)
                .transpose()
                .map_err(corrupt_row)?,
            amenities: serde_json::from_str(&row.amenities).map_err(corrupt_row)?,
            description: row.description,
            is_available: row.is_available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn encode_amenities(amenities: &[String]) -> DomainResult<String> {
    serde_json::to_string(amenities).map_err(|err| DomainError::Persistence(err.to_string()))
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn insert(&self, room: Room) -> DomainResult<Room> {
        let amenities = encode_amenities(&room.amenities)?;
        let sql = format!(
            "INSERT INTO rooms ({ROOM_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {ROOM_COLUMNS}"
        );

        let row = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(room.id.to_string())
            .bind(room.number.as_str())
            .bind(room.room_type.as_str())
            .bind(room.price.value())
            .bind(i64::from(room.capacity.value()))
            .bind(room.floor)
            .bind(amenities)
            .bind(room.description.as_deref())
            .bind(room.is_available)
            .bind(room.created_at)
            .bind(room.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(|err| map_write(err, ROOM_NUMBER_UNIQUE))?;

        Room::try_from(row)
    }

    async fn update(&self, room: Room) -> DomainResult<Room> {
        let amenities = encode_amenities(&room.amenities)?;
        let sql = format!(
            "UPDATE rooms SET number = ?, room_type = ?, price = ?, capacity = ?, floor = ?, amenities = ?, description = ?, is_available = ?, updated_at = ? WHERE id = ? RETURNING {ROOM_COLUMNS}"
        );

        let row = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(room.number.as_str())
            .bind(room.room_type.as_str())
            .bind(room.price.value())
            .bind(i64::from(room.capacity.value()))
            .bind(room.floor)
            .bind(amenities)
            .bind(room.description.as_deref())
            .bind(room.is_available)
            .bind(room.updated_at)
            .bind(room.id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|err| map_write(err, ROOM_NUMBER_UNIQUE))?
            .ok_or_else(|| DomainError::not_found(Resource::Room, room.id))?;

        Room::try_from(row)
    }

    async fn delete(&self, id: RoomId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Resource::Room, id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RoomId) -> DomainResult<Option<Room>> {
        let sql = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?");
        let row = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Room::try_from).transpose()
    }

    async fn list(&self, filter: RoomFilter) -> DomainResult<Vec<Room>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE 1 = 1"));

        if let Some(room_type) = filter.room_type {
            builder.push(" AND room_type = ");
            builder.push_bind(room_type.as_str());
        }
        if let Some(is_available) = filter.is_available {
            builder.push(" AND is_available = ");
            builder.push_bind(is_available);
        }
        if let Some(min_price) = filter.min_price {
            builder.push(" AND price >= ");
            builder.push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            builder.push(" AND price <= ");
            builder.push_bind(max_price);
        }
        builder.push(" ORDER BY number ASC");

        let rows = builder
            .build_query_as::<RoomRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Room::try_from).collect()
    }
}
