//! Dashboard and chart data

use axum::{extract::State, response::Json};

use shared::{Envelope, StatEntry};
use crate::portal_impl::Portal;
use crate::traits::AdmissionsStore;
use crate::types::{DashboardSummary, StatisticsBundle};

pub async fn by_school<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<StatEntry>>> {
    Json(portal.statistics().stats_by_school().await)
}

pub async fn by_major<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<StatEntry>>> {
    Json(portal.statistics().stats_by_major().await)
}

pub async fn by_status<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<StatEntry>>> {
    Json(portal.statistics().stats_by_status().await)
}

pub async fn all<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<StatisticsBundle>> {
    Json(portal.statistics().all_stats().await)
}

pub async fn dashboard<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<DashboardSummary>> {
    Json(portal.statistics().dashboard_summary().await)
}
