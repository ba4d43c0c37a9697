//! HTTP API handlers and routes.
//!
//! A thin proxy over the research pipeline, built on Axum.
//!
//! # API Endpoints
//!
//! - `POST /api/research` - run one research pass; body `{ "topic": "..." }`,
//!   responds 400 when the topic is missing or blank
//! - `GET /api/health` - health check
//!
//! CORS is wide open: the API serves browser frontends on other origins.

/// Request handlers for each endpoint.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
