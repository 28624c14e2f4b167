//! Test helper utilities for portal integration tests

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use portal::traits::MockAdmissionsStore;
use portal::{Portal, PortalState, RealAdmissionsStore, RetryPolicy};

/// Store client pointed at a wiremock server
pub fn store_for(server_uri: &str) -> RealAdmissionsStore {
    RealAdmissionsStore::new(Url::parse(server_uri).unwrap(), Some(Duration::from_secs(5))).unwrap()
}

/// Router over a mock store, with retries that never wait
pub fn router_with(store: MockAdmissionsStore) -> Router {
    let state = PortalState::new(
        "127.0.0.1:0".parse().unwrap(),
        Url::parse("http://store.test").unwrap(),
    );
    let retry = RetryPolicy {
        max_retries: 0,
        delay: Duration::ZERO,
    };
    Portal::with_parts(state, store, retry).build_router()
}

/// Send one request and decode the JSON body, if any
pub async fn call(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Option<Value>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };

    (status, json)
}
