// src/domain/guest/entity.rs
use crate::domain::guest::value_objects::{Email, GuestId, PersonName, Phone};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Guest {
    pub id: GuestId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGuest {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GuestChanges {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

impl Guest {
    pub fn create(id: GuestId, new: NewGuest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            nationality: new.nationality,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: GuestChanges, now: DateTime<Utc>) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if changes.address.is_some() {
            self.address = changes.address;
        }
        if changes.nationality.is_some() {
            self.nationality = changes.nationality;
        }
        self.updated_at = now;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `search` matches first name, last name or email as a substring.
#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    pub search: Option<String>,
    pub email: Option<String>,
}
