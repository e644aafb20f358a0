use crate::domain::errors::{DomainError, UniqueConstraint, ValidationErrors};
use sqlx::error::ErrorKind;
use std::fmt;

/// Extended result code SQLite reports for a primary key collision. sqlx folds
/// it into `UniqueViolation`, but it never means a user-facing conflict.
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

/// Classifies a failed write. `unique` is the single uniqueness rule of the
/// table being written.
pub fn map_write(err: sqlx::Error, unique: UniqueConstraint) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_PRIMARYKEY) {
                return DomainError::Persistence(format!(
                    "primary key collision: {}",
                    db_err.message()
                ));
            }

            match db_err.kind() {
                ErrorKind::UniqueViolation => DomainError::Conflict(unique),
                ErrorKind::ForeignKeyViolation => DomainError::Validation(
                    ValidationErrors::single("reference", "referenced record does not exist"),
                ),
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn corrupt_row<E: fmt::Display>(err: E) -> DomainError {
    DomainError::Persistence(format!("corrupt row: {err}"))
}
