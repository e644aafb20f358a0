// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Room,
    Guest,
    Booking,
}

impl Resource {
    /// Capitalised name used in client-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Room => "Room",
            Resource::Guest => "Guest",
            Resource::Booking => "Booking",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Room => "room",
            Resource::Guest => "guest",
            Resource::Booking => "booking",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed a constraint. `message` is complete on its own,
/// e.g. `"price must be a non-negative number"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects every violation of a payload so one response can report all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation::new(field, message)])
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Records `"<field> is required"` when the value is absent.
    pub fn required<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(FieldViolation::required(field));
        }
        value
    }

    pub fn check<T>(&mut self, result: Result<T, FieldViolation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(violation);
                None
            }
        }
    }

    /// Validates an optional input: absent stays absent, present must pass.
    pub fn optional<T, U>(
        &mut self,
        value: Option<T>,
        validate: impl FnOnce(T) -> Result<U, FieldViolation>,
    ) -> Option<U> {
        value.and_then(|value| self.check(validate(value)))
    }

    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("Validation failed");
        }
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&violation.message)?;
        }
        Ok(())
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(value: FieldViolation) -> Self {
        Self(vec![value])
    }
}

/// A uniqueness rule enforced by the store, described by the fields it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueConstraint {
    pub resource: Resource,
    pub fields: &'static [&'static str],
}

impl UniqueConstraint {
    pub const fn new(resource: Resource, fields: &'static [&'static str]) -> Self {
        Self { resource, fields }
    }

    pub fn message(&self) -> String {
        match self.fields {
            [field] => format!("{} {field} already exists", self.resource.name()),
            fields => format!(
                "{} already exists for this {}",
                self.resource.name(),
                fields.join(" and ")
            ),
        }
    }
}

impl fmt::Display for UniqueConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    #[error("malformed {resource} id: {value:?}")]
    MalformedIdentifier { resource: Resource, value: String },
    #[error("conflict: {0}")]
    Conflict(UniqueConstraint),
    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(resource: Resource, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<FieldViolation> for DomainError {
    fn from(value: FieldViolation) -> Self {
        Self::Validation(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_are_joined_in_order() {
        let mut errors = ValidationErrors::new();
        errors.required::<String>("number", None);
        errors.push(FieldViolation::new("price", "price must be a non-negative number"));
        assert_eq!(
            errors.to_string(),
            "number is required, price must be a non-negative number"
        );
    }

    #[test]
    fn empty_collector_passes() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.required("number", Some(1)), Some(1));
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn optional_skips_absent_values() {
        let mut errors = ValidationErrors::new();
        let value: Option<u32> =
            errors.optional(None::<i64>, |_| Err(FieldViolation::new("floor", "bad")));
        assert!(value.is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn unique_constraint_messages_name_the_fields() {
        let single = UniqueConstraint::new(Resource::Room, &["number"]);
        assert_eq!(single.message(), "Room number already exists");

        let composite = UniqueConstraint::new(Resource::Booking, &["room_id", "check_in"]);
        assert_eq!(
            composite.message(),
            "Booking already exists for this room_id and check_in"
        );
    }
}
