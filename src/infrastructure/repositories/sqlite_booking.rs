use crate::domain::booking::{
    BOOKING_SLOT_UNIQUE, Booking, BookingFilter, BookingId, BookingRepository, BookingStatus,
    GuestCount, Stay,
};
use crate::domain::errors::{DomainError, DomainResult, Resource};
use crate::domain::guest::GuestId;
use crate::domain::id::EntityId;
use crate::domain::room::RoomId;
use crate::infrastructure::repositories::error::{corrupt_row, map_sqlx, map_write};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const BOOKING_COLUMNS: &str = "id, room_id, guest_id, check_in, check_out, number_of_guests, total_price, status, special_requests, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteBookingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBookingRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRow {
    id: String,
    room_id: String,
    guest_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    number_of_guests: i64,
    total_price: f64,
    status: String,
    special_requests: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: BookingId::parse(&row.id).map_err(corrupt_row)?,
            room_id: RoomId::parse(&row.room_id).map_err(corrupt_row)?,
            guest_id: GuestId::parse(&row.guest_id).map_err(corrupt_row)?,
            stay: Stay::new(row.check_in, row.check_out).map_err(corrupt_row)?,
            number_of_guests: GuestCount::new(row.number_of_guests).map_err(corrupt_row)?,
            total_price: row.total_price,
            status: BookingStatus::parse(&row.status).map_err(corrupt_row)?,
            special_requests: row.special_requests,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn insert(&self, booking: Booking) -> DomainResult<Booking> {
        let sql = format!(
            "INSERT INTO bookings ({BOOKING_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {BOOKING_COLUMNS}"
        );

        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(booking.id.to_string())
            .bind(booking.room_id.to_string())
            .bind(booking.guest_id.to_string())
            .bind(booking.stay.check_in())
            .bind(booking.stay.check_out())
            .bind(i64::from(booking.number_of_guests.value()))
            .bind(booking.total_price)
            .bind(booking.status.as_str())
            .bind(booking.special_requests.as_deref())
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(|err| map_write(err, BOOKING_SLOT_UNIQUE))?;

        Booking::try_from(row)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        let sql = format!(
            "UPDATE bookings SET room_id = ?, guest_id = ?, check_in = ?, check_out = ?, number_of_guests = ?, total_price = ?, status = ?, special_requests = ?, updated_at = ? WHERE id = ? RETURNING {BOOKING_COLUMNS}"
        );

        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(booking.room_id.to_string())
            .bind(booking.guest_id.to_string())
            .bind(booking.stay.check_in())
            .bind(booking.stay.check_out())
            .bind(i64::from(booking.number_of_guests.value()))
            .bind(booking.total_price)
            .bind(booking.status.as_str())
            .bind(booking.special_requests.as_deref())
            .bind(booking.updated_at)
            .bind(booking.id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|err| map_write(err, BOOKING_SLOT_UNIQUE))?
            .ok_or_else(|| DomainError::not_found(Resource::Booking, booking.id))?;

        Booking::try_from(row)
    }

    async fn delete(&self, id: BookingId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Resource::Booking, id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: BookingId) -> DomainResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?");
        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Booking::try_from).transpose()
    }

    async fn list(&self, filter: BookingFilter) -> DomainResult<Vec<Booking>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE 1 = 1"));

        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(room_id) = filter.room_id {
            builder.push(" AND room_id = ");
            builder.push_bind(room_id.to_string());
        }
        if let Some(guest_id) = filter.guest_id {
            builder.push(" AND guest_id = ");
            builder.push_bind(guest_id.to_string());
        }
        builder.push(" ORDER BY check_in ASC, created_at ASC");

        let rows = builder
            .build_query_as::<BookingRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}
