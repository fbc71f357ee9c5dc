//! HTTP API: server wiring, routing, and outcome-to-status mapping.

pub mod app;
pub mod config;
pub mod middleware;
