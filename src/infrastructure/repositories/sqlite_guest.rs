use crate::domain::errors::{DomainError, DomainResult, Resource};
use crate::domain::guest::{
    Email, GUEST_EMAIL_UNIQUE, Guest, GuestFilter, GuestId, GuestRepository, PersonName, Phone,
};
use crate::domain::id::EntityId;
use crate::infrastructure::repositories::error::{corrupt_row, map_sqlx, map_write};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const GUEST_COLUMNS: &str =
    "id, first_name, last_name, email, phone, address, nationality, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteGuestRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteGuestRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GuestRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: Option<String>,
    nationality: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GuestRow> for Guest {
    type Error = DomainError;

    fn try_from(row: GuestRow) -> Result<Self, Self::Error> {
        Ok(Guest {
            id: GuestId::parse(&row.id).map_err(corrupt_row)?,
            first_name: PersonName::new("first_name", row.first_name).map_err(corrupt_row)?,
            last_name: PersonName::new("last_name", row.last_name).map_err(corrupt_row)?,
            email: Email::new(row.email).map_err(corrupt_row)?,
            phone: Phone::new(row.phone).map_err(corrupt_row)?,
            address: row.address,
            nationality: row.nationality,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl GuestRepository for SqliteGuestRepository {
    async fn insert(&self, guest: Guest) -> DomainResult<Guest> {
        let sql = format!(
            "INSERT INTO guests ({GUEST_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {GUEST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, GuestRow>(&sql)
            .bind(guest.id.to_string())
            .bind(guest.first_name.as_str())
            .bind(guest.last_name.as_str())
            .bind(guest.email.as_str())
            .bind(guest.phone.as_str())
            .bind(guest.address.as_deref())
            .bind(guest.nationality.as_deref())
            .bind(guest.created_at)
            .bind(guest.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(|err| map_write(err, GUEST_EMAIL_UNIQUE))?;

        Guest::try_from(row)
    }

    async fn update(&self, guest: Guest) -> DomainResult<Guest> {
        let sql = format!(
            "UPDATE guests SET first_name = ?, last_name = ?, email = ?, phone = ?, address = ?, nationality = ?, updated_at = ? WHERE id = ? RETURNING {GUEST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, GuestRow>(&sql)
            .bind(guest.first_name.as_str())
            .bind(guest.last_name.as_str())
            .bind(guest.email.as_str())
            .bind(guest.phone.as_str())
            .bind(guest.address.as_deref())
            .bind(guest.nationality.as_deref())
            .bind(guest.updated_at)
            .bind(guest.id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|err| map_write(err, GUEST_EMAIL_UNIQUE))?
            .ok_or_else(|| DomainError::not_found(Resource::Guest, guest.id))?;

        Guest::try_from(row)
    }

    async fn delete(&self, id: GuestId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Resource::Guest, id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: GuestId) -> DomainResult<Option<Guest>> {
        let sql = format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = ?");
        let row = sqlx::query_as::<_, GuestRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Guest::try_from).transpose()
    }

    async fn list(&self, filter: GuestFilter) -> DomainResult<Vec<Guest>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {GUEST_COLUMNS} FROM guests WHERE 1 = 1"));

        if let Some(email) = filter.email {
            builder.push(" AND email = ");
            builder.push_bind(email);
        }
        if let Some(search) = filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            builder.push(" AND (lower(first_name) LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR lower(last_name) LIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR email LIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        builder.push(" ORDER BY last_name ASC, first_name ASC");

        let rows = builder
            .build_query_as::<GuestRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Guest::try_from).collect()
    }
}
