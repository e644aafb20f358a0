use crate::domain::errors::FieldViolation;
use std::fmt;

pub use crate::domain::id::GuestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// `field` is either `first_name` or `last_name`.
    pub fn new(field: &'static str, value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldViolation::new(field, format!("{field} cannot be empty")));
        }
        if value.chars().count() > 100 {
            return Err(FieldViolation::new(
                field,
                format!("{field} cannot exceed 100 characters"),
            ));
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

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored lowercase so the uniqueness check is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into().trim().to_lowercase();
        let invalid = || FieldViolation::new("email", "email must be a valid email address");

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        let domain_ok = domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
        if local.is_empty() || !domain_ok || domain.contains('@') || value.contains(' ') {
            return Err(invalid());
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldViolation::new("phone", "phone cannot be empty"));
        }
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')');
        if !value.chars().all(allowed) {
            return Err(FieldViolation::new(
                "phone",
                "phone may only contain digits, spaces, '+', '-', '(' and ')'",
            ));
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
