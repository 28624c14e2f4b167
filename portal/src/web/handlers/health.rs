//! Liveness endpoint

use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::portal_impl::Portal;
use crate::traits::AdmissionsStore;

/// Reports the portal itself; the store is not probed
pub async fn health_check<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Value> {
    let state = portal.state();

    Json(json!({
        "status": if state.is_running() { "healthy" } else { "stopping" },
        "uptime_seconds": state.get_uptime_seconds(),
        "store_url": state.store_url.as_str(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
