// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::id::EntityId,
    presentation::http::error::HttpError,
};
use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Path segment `{id}` parsed into a typed identifier. A value that is not an
/// identifier of `T`'s resource is a malformed identifier.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: EntityId,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation("id", rejection.body_text()))
            })?;

        T::parse(&raw).map(Self).map_err(HttpError::from_error)
    }
}

/// Request body accepted either as JSON or as a url-encoded form. An empty
/// body without a content type reads as `{}` so required-field validation
/// reports what is missing.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

const INVALID_BODY_MESSAGE: &str = "Invalid request body";
const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

fn body_error(message: impl Into<String>) -> HttpError {
    HttpError::from_error(ApplicationError::validation("body", message))
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    let source: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };

    serde_json::from_slice(source).map_err(|err| match err.classify() {
        Category::Data => body_error(INVALID_BODY_MESSAGE).with_context(err),
        Category::Syntax | Category::Eof => body_error("Malformed JSON body"),
        Category::Io => HttpError::from_error(err),
    })
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    body_error(INVALID_BODY_MESSAGE).with_context(rejection.body_text())
                })?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| body_error(rejection.body_text()))?;
        decode_json(&bytes).map(Self)
    }
}

/// Query string filters. Unknown keys are ignored; a value of the wrong type
/// is a validation failure.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(
                    "query",
                    INVALID_QUERY_MESSAGE,
                ))
                .with_context(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}
