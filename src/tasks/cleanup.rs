//! Expiry Purge Task
//!
//! Background task that periodically drops expired entries from the
//! in-memory provider. Expired entries are already invisible to reads; this
//! only reclaims their memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::provider::MemoryProvider;

/// Spawns the purge loop, running every `cleanup_interval_secs` seconds
/// (at least one). Abort the returned handle on shutdown.
pub fn spawn_cleanup_task(
    provider: Arc<MemoryProvider>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry purge task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            match provider.purge_expired() {
                0 => debug!("Expiry purge: no expired entries found"),
                removed => info!("Expiry purge: removed {} expired entries", removed),
            }
        }
    })
}
