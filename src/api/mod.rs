//! API Module
//!
//! HTTP handlers and routing for the lookup service REST API.
//!
//! # Endpoints
//! - `POST /address_info` - Look up bandwidth, energy and balance for an address
//! - `GET /recent_requests` - Paginated lookup history
//! - `GET /cache/stats` - Result cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
