//! API Module
//!
//! HTTP handlers and routing that let a host drive the cache facade.
//!
//! # Endpoints
//! - `PUT /cache` - Store content
//! - `GET /cache/:key` - Read content
//! - `DELETE /cache/:key` - Remove one key
//! - `DELETE /cache` - Flush the whole provider
//! - `DELETE /namespace` - Clear the current namespace
//! - `/settings/*` - Prefix, tag and kill switch
//! - `GET /stats`, `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
