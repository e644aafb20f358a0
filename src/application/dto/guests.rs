use crate::domain::guest::Guest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Guest> for GuestDto {
    fn from(guest: Guest) -> Self {
        let full_name = guest.full_name();
        Self {
            id: guest.id.into(),
            first_name: guest.first_name.into_inner(),
            last_name: guest.last_name.into_inner(),
            full_name,
            email: guest.email.into_inner(),
            phone: guest.phone.into_inner(),
            address: guest.address,
            nationality: guest.nationality,
            created_at: guest.created_at,
            updated_at: guest.updated_at,
        }
    }
}
