//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the host is up.
//!
//! # Tasks
//! - Expiry purge: reclaims expired entries in the in-memory provider

mod cleanup;

pub use cleanup::spawn_cleanup_task;
