//! Request and Response models for the host API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DisabledRequest, GetCacheQuery, SetCacheRequest, SettingValueRequest};
pub use responses::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetResponse, SettingsResponse,
    StatsResponse,
};
