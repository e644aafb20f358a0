// src/presentation/http/middleware/error_responder.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{
    BAD_REQUEST_MESSAGE, ErrorKind, FailureReport, HttpError, INTERNAL_ERROR_MESSAGE,
    ROUTE_NOT_FOUND_MESSAGE,
};
use crate::presentation::http::response::{Enveloped, error_response};
use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Terminal stage of the pipeline. Logs every failure that reaches it and
/// rewrites framework rejections that carry no error envelope.
#[derive(Debug, Clone, Copy)]
pub struct ErrorResponder {
    report_locations: bool,
}

impl ErrorResponder {
    pub fn new(report_locations: bool) -> Self {
        Self { report_locations }
    }

    fn log_failure(&self, method: &Method, uri: &Uri, status: StatusCode, report: &FailureReport) {
        let location = self
            .report_locations
            .then(|| report.location.to_string());

        match report.kind {
            ErrorKind::Unclassified => tracing::error!(
                kind = %report.kind,
                status = status.as_u16(),
                %method,
                %uri,
                detail = %report.detail,
                location = location.as_deref(),
                "request failed"
            ),
            _ => tracing::warn!(
                kind = %report.kind,
                status = status.as_u16(),
                %method,
                %uri,
                detail = %report.detail,
                location = location.as_deref(),
                "request rejected"
            ),
        }
    }
}

/// Status and message used for an error response produced outside the
/// handlers, such as a method mismatch or an extractor rejection.
pub fn rewrite_status(status: StatusCode) -> (StatusCode, &'static str) {
    match status {
        StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => {
            (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_MESSAGE)
        }
        status if status.is_client_error() => (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
    }
}

pub async fn respond_to_failures(
    State(responder): State<ErrorResponder>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();

    if let Some(report) = response.extensions().get::<FailureReport>() {
        responder.log_failure(&method, &uri, status, report);
        return response;
    }

    let failed = status.is_client_error() || status.is_server_error();
    if !failed || response.extensions().get::<Enveloped>().is_some() {
        return response;
    }

    let (rewritten, message) = rewrite_status(status);
    if rewritten.is_server_error() {
        tracing::error!(status = status.as_u16(), %method, %uri, "unenveloped server error");
    } else {
        tracing::warn!(
            original = status.as_u16(),
            status = rewritten.as_u16(),
            %method,
            %uri,
            "framework rejection rewritten"
        );
    }
    error_response(rewritten, message)
}

/// Response for a handler that panicked. The payload is logged by the
/// responder stage, never sent.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    HttpError::from_error(ApplicationError::unclassified(format!(
        "handler panicked: {detail}"
    )))
    .into_response()
}
