// src/domain/id.rs
use crate::domain::errors::{DomainError, DomainResult, Resource};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identifier of a stored record. Parsing failures are reported as malformed
/// identifiers of the owning resource.
pub trait EntityId: Sized + Copy + fmt::Display + Send + Sync + 'static {
    const RESOURCE: Resource;

    fn from_uuid(value: Uuid) -> Self;

    fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self::from_uuid)
            .map_err(|_| DomainError::MalformedIdentifier {
                resource: Self::RESOURCE,
                value: value.to_string(),
            })
    }
}

macro_rules! entity_id {
    ($name:ident, $resource:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl EntityId for $name {
            const RESOURCE: Resource = $resource;

            fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as EntityId>::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }
    };
}

entity_id!(RoomId, Resource::Room);
entity_id!(GuestId, Resource::Guest);
entity_id!(BookingId, Resource::Booking);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_display() {
        let id = RoomId::generate();
        let parsed: RoomId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_value_names_the_resource() {
        let err = BookingId::parse("507f1f77bcf86cd7994390").unwrap_err();
        match err {
            DomainError::MalformedIdentifier { resource, value } => {
                assert_eq!(resource, Resource::Booking);
                assert_eq!(value, "507f1f77bcf86cd7994390");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
