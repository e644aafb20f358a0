// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod pipeline;
pub mod response;
pub mod routes;
pub mod state;
