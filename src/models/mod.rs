//! Request and Response models for the lookup service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod account;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use account::AccountInfo;
pub use requests::{AddressRequest, HistoryQuery, MAX_PAGE_SIZE};
pub use responses::{
    ErrorResponse, HealthResponse, HistoryResponse, LookupResponse, StatsResponse,
};
