// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::response::error_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{fmt, panic::Location};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    MalformedIdentifier,
    Conflict,
    NotFound,
    Unclassified,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation | ErrorKind::MalformedIdentifier => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::MalformedIdentifier => "malformed_identifier",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attached to every error response so the responder stage can log the
/// original failure without re-parsing the body.
#[derive(Debug, Clone)]
pub struct FailureReport {
    pub kind: ErrorKind,
    pub detail: String,
    pub location: &'static Location<'static>,
}

/// A classified failure together with the place it was forwarded from.
#[derive(Debug)]
pub struct HttpError {
    failure: ApplicationError,
    context: Option<String>,
    location: &'static Location<'static>,
}

impl HttpError {
    #[track_caller]
    pub fn from_error(err: impl Into<ApplicationError>) -> Self {
        Self {
            failure: err.into(),
            context: None,
            location: Location::caller(),
        }
    }

    /// Extra text for the server log only.
    pub fn with_context(mut self, context: impl fmt::Display) -> Self {
        self.context = Some(context.to_string());
        self
    }

    /// What the responder logs: the original failure plus any context.
    pub fn detail(&self) -> String {
        match &self.context {
            Some(context) => format!("{}: {context}", self.failure),
            None => self.failure.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.failure {
            ApplicationError::Validation(_) => ErrorKind::Validation,
            ApplicationError::MalformedIdentifier { .. } => ErrorKind::MalformedIdentifier,
            ApplicationError::Conflict(_) => ErrorKind::Conflict,
            ApplicationError::NotFound { .. } => ErrorKind::NotFound,
            ApplicationError::Unclassified(_) => ErrorKind::Unclassified,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The only text that leaves the process. Identifiers and driver detail
    /// stay in the log.
    pub fn client_message(&self) -> String {
        match &self.failure {
            ApplicationError::Validation(errors) => errors.to_string(),
            ApplicationError::MalformedIdentifier { resource, .. } => {
                format!("Invalid {} id format", resource.as_str())
            }
            ApplicationError::Conflict(constraint) => constraint.message(),
            ApplicationError::NotFound { resource, .. } => {
                format!("{} not found", resource.name())
            }
            ApplicationError::Unclassified(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl<E: Into<ApplicationError>> From<E> for HttpError {
    #[track_caller]
    fn from(value: E) -> Self {
        Self::from_error(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = error_response(self.status(), self.client_message());
        response.extensions_mut().insert(FailureReport {
            kind: self.kind(),
            detail: self.detail(),
            location: self.location,
        });
        response
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    #[track_caller]
    fn into_http(self) -> HttpResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(HttpError::from_error(err)),
        }
    }
}
