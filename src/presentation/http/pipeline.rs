// src/presentation/http/pipeline.rs
use crate::config::{AllowedOrigins, AppConfig};
use crate::presentation::http::controllers::system::route_not_found;
use crate::presentation::http::middleware::{ErrorResponder, handle_panic, respond_to_failures};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::Method,
    middleware,
};
use std::{collections::HashSet, fmt, path::PathBuf, time::Duration};
use thiserror::Error;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// One step of request handling, listed in the order a request meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Cors,
    BodyParsing,
    RequestLogging,
    Routes,
    StaticFiles,
    NotFound,
    ErrorResponder,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Cors => "cors",
            Stage::BodyParsing => "body_parsing",
            Stage::RequestLogging => "request_logging",
            Stage::Routes => "routes",
            Stage::StaticFiles => "static_files",
            Stage::NotFound => "not_found",
            Stage::ErrorResponder => "error_responder",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("stage {0} appears more than once")]
    Duplicate(Stage),
    #[error("required stage {0} is missing")]
    Missing(Stage),
    #[error("the error responder must be the last stage")]
    ResponderNotTerminal,
    #[error("the not-found fallback must directly precede the error responder")]
    NotFoundMisplaced,
    #[error("stage {0} must run before routes")]
    AfterRoutes(Stage),
    #[error("static files must be served after routes")]
    StaticFilesMisplaced,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub allowed_origins: AllowedOrigins,
    pub static_dir: PathBuf,
    pub body_limit: usize,
    pub report_locations: bool,
}

impl PipelineSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().clone(),
            static_dir: config.static_dir().clone(),
            body_limit: config.body_limit(),
            report_locations: config.environment().is_development(),
        }
    }
}

/// An ordered, validated list of stages. Construction fails instead of
/// producing a router whose fallback or error stage can be bypassed.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>, settings: PipelineSettings) -> Result<Self, PipelineError> {
        validate(&stages)?;
        Ok(Self { stages, settings })
    }

    /// CORS, body parsing, request logging (development only), routes, static
    /// files, not-found fallback, error responder.
    pub fn for_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let mut stages = vec![Stage::Cors, Stage::BodyParsing];
        if config.environment().is_development() {
            stages.push(Stage::RequestLogging);
        }
        stages.extend([
            Stage::Routes,
            Stage::StaticFiles,
            Stage::NotFound,
            Stage::ErrorResponder,
        ]);

        Self::new(stages, PipelineSettings::from_config(config))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Wraps `routes` so that requests flow through the stages in order.
    pub fn into_router(self, routes: Router) -> Router {
        let mut router = if self.stages.contains(&Stage::StaticFiles) {
            let static_files = ServeDir::new(&self.settings.static_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(route_not_found.into_service());
            routes.fallback_service(static_files)
        } else {
            routes.fallback(route_not_found)
        };

        // Layers wrap from the inside out: the error responder sits directly
        // around the routes, CORS is outermost.
        if self.stages.contains(&Stage::ErrorResponder) {
            router = router
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(middleware::from_fn_with_state(
                    ErrorResponder::new(self.settings.report_locations),
                    respond_to_failures,
                ));
        }

        let before_routes: Vec<Stage> = self
            .stages
            .iter()
            .copied()
            .take_while(|stage| *stage != Stage::Routes)
            .collect();
        for stage in before_routes.into_iter().rev() {
            router = match stage {
                Stage::Cors => router.layer(cors_layer(&self.settings.allowed_origins)),
                Stage::BodyParsing => router.layer(DefaultBodyLimit::max(self.settings.body_limit)),
                Stage::RequestLogging => router.layer(TraceLayer::new_for_http()),
                _ => router,
            };
        }

        router
    }
}

fn validate(stages: &[Stage]) -> Result<(), PipelineError> {
    let mut seen = HashSet::new();
    for stage in stages {
        if !seen.insert(*stage) {
            return Err(PipelineError::Duplicate(*stage));
        }
    }

    for required in [Stage::Routes, Stage::NotFound, Stage::ErrorResponder] {
        if !seen.contains(&required) {
            return Err(PipelineError::Missing(required));
        }
    }

    let position = |target: Stage| stages.iter().position(|stage| *stage == target);
    let last = stages.len() - 1;

    if position(Stage::ErrorResponder) != Some(last) {
        return Err(PipelineError::ResponderNotTerminal);
    }
    if position(Stage::NotFound) != Some(last - 1) {
        return Err(PipelineError::NotFoundMisplaced);
    }

    let routes = position(Stage::Routes).unwrap_or(0);
    for stage in [Stage::Cors, Stage::BodyParsing, Stage::RequestLogging] {
        if position(stage).is_some_and(|index| index > routes) {
            return Err(PipelineError::AfterRoutes(stage));
        }
    }
    if position(Stage::StaticFiles).is_some_and(|index| index < routes) {
        return Err(PipelineError::StaticFilesMisplaced);
    }

    Ok(())
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    match origins {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(list) => layer.allow_origin(AllowOrigin::list(list.iter().cloned())),
    }
}
