//! Portal state management
//!
//! Read-only runtime facts shared by handlers. The portal keeps no domain
//! state; every request goes to the store.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use url::Url;

#[derive(Debug)]
pub struct PortalState {
    pub bind_address: SocketAddr,
    pub store_url: Url,
    pub is_running: AtomicBool,
    pub server_start_time: Instant,
}

impl PortalState {
    pub fn new(bind_address: SocketAddr, store_url: Url) -> Self {
        Self {
            bind_address,
            store_url,
            is_running: AtomicBool::new(true),
            server_start_time: Instant::now(),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
