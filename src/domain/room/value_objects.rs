use crate::domain::errors::FieldViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::domain::id::RoomId;

pub const MAX_ROOM_CAPACITY: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomNumber(String);

impl RoomNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldViolation::new("number", "number cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Suite => "suite",
            RoomType::Deluxe => "deluxe",
        }
    }

    pub fn parse(value: &str) -> Result<Self, FieldViolation> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                FieldViolation::new(
                    "room_type",
                    "room_type must be one of single, double, suite, deluxe",
                )
            })
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nightly rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, FieldViolation> {
        if !value.is_finite() || value < 0.0 {
            return Err(FieldViolation::new(
                "price",
                "price must be a non-negative number",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(u32);

impl Capacity {
    pub fn new(value: i64) -> Result<Self, FieldViolation> {
        if !(1..=MAX_ROOM_CAPACITY).contains(&value) {
            return Err(FieldViolation::new(
                "capacity",
                format!("capacity must be between 1 and {MAX_ROOM_CAPACITY}"),
            ));
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Trims entries and drops blanks.
pub fn normalize_amenities(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_parse_is_case_insensitive() {
        assert_eq!(RoomType::parse(" Suite ").unwrap(), RoomType::Suite);
        assert!(RoomType::parse("penthouse").is_err());
    }

    #[test]
    fn price_rejects_negative_and_nan() {
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn capacity_bounds() {
        assert!(Capacity::new(0).is_err());
        assert!(Capacity::new(MAX_ROOM_CAPACITY + 1).is_err());
        assert_eq!(Capacity::new(2).unwrap().value(), 2);
    }

    #[test]
    fn blank_number_is_rejected() {
        let err = RoomNumber::new("   ").unwrap_err();
        assert_eq!(err.field, "number");
    }
}
