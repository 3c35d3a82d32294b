//! HTTP API: routing, request handlers, and error mapping for the users service.

pub mod app;
pub mod middleware;
