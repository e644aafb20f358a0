use crate::domain::errors::FieldViolation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::domain::id::BookingId;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Result<Self, FieldViolation> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                FieldViolation::new(
                    "status",
                    "status must be one of pending, confirmed, checked_in, checked_out, cancelled",
                )
            })
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FieldViolation> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| FieldViolation::new(field, format!("{field} must be a date (YYYY-MM-DD)")))
}

/// Check-in and check-out dates; check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, FieldViolation> {
        if check_out <= check_in {
            return Err(FieldViolation::new(
                "check_out",
                "check_out must be after check_in",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCount(u32);

impl GuestCount {
    pub fn new(value: i64) -> Result<Self, FieldViolation> {
        if value < 1 || value > i64::from(u32::MAX) {
            return Err(FieldViolation::new(
                "number_of_guests",
                "number_of_guests must be at least 1",
            ));
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date("check_in", value).unwrap()
    }

    #[test]
    fn stay_counts_nights() {
        let stay = Stay::new(date("2024-03-01"), date("2024-03-04")).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn stay_rejects_same_day_checkout() {
        let err = Stay::new(date("2024-03-01"), date("2024-03-01")).unwrap_err();
        assert_eq!(err.field, "check_out");
    }

    #[test]
    fn status_parse_and_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert_eq!(
            BookingStatus::parse("Checked_In").unwrap(),
            BookingStatus::CheckedIn
        );
        assert!(BookingStatus::parse("lost").is_err());
    }

    #[test]
    fn date_parse_reports_field() {
        let err = parse_date("check_out", "03/04/2024").unwrap_err();
        assert_eq!(err.message, "check_out must be a date (YYYY-MM-DD)");
    }
}
