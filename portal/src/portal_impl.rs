//! Main portal implementation
//!
//! `Portal` owns the services built over one store client and serves them
//! through the axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use shared::logging;
use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};
use crate::services::{ApplicationService, CatalogService, RetryPolicy, StatisticsService, StudentService};
use crate::state::PortalState;
use crate::traits::AdmissionsStore;
use crate::web::handlers::{applications, catalog, health, statistics, students};

/// Portal with dependency injection over the store
pub struct Portal<S> {
    state: Arc<PortalState>,
    applications: ApplicationService<S>,
    catalog: CatalogService<S>,
    statistics: StatisticsService<S>,
    students: StudentService<S>,
}

impl<S> Clone for Portal<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            applications: self.applications.clone(),
            catalog: self.catalog.clone(),
            statistics: self.statistics.clone(),
            students: self.students.clone(),
        }
    }
}

impl<S: AdmissionsStore> Portal<S> {
    pub fn new(config: &PortalConfig, store: S) -> Self {
        Self::with_parts(
            PortalState::new(config.bind_address, config.store_url.clone()),
            store,
            config.retry,
        )
    }

    pub fn with_parts(state: PortalState, store: S, retry: RetryPolicy) -> Self {
        let store = Arc::new(store);

        Self {
            state: Arc::new(state),
            applications: ApplicationService::new(Arc::clone(&store)),
            catalog: CatalogService::new(Arc::clone(&store)),
            statistics: StatisticsService::new(Arc::clone(&store)),
            students: StudentService::new(store, retry),
        }
    }

    pub fn applications(&self) -> &ApplicationService<S> {
        &self.applications
    }

    pub fn catalog(&self) -> &CatalogService<S> {
        &self.catalog
    }

    pub fn statistics(&self) -> &StatisticsService<S> {
        &self.statistics
    }

    pub fn students(&self) -> &StudentService<S> {
        &self.students
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<PortalState> {
        &self.state
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Applications
            .route("/api/applications", get(applications::list::<S>))
            .route("/api/applications/search", get(applications::search::<S>))
            .route(
                "/api/applications/:id",
                get(applications::get_one::<S>).put(applications::replace::<S>),
            )
            .route(
                "/api/applications/:id/status",
                patch(applications::update_status::<S>),
            )
            // Schools
            .route(
                "/api/schools",
                get(catalog::list_schools::<S>).post(catalog::add_school::<S>),
            )
            .route(
                "/api/schools/:id",
                get(catalog::get_school::<S>)
                    .put(catalog::update_school::<S>)
                    .delete(catalog::delete_school::<S>),
            )
            .route("/api/schools/:id/majors", get(catalog::majors_of_school::<S>))
            // Majors
            .route(
                "/api/majors",
                get(catalog::list_majors::<S>).post(catalog::add_major::<S>),
            )
            .route(
                "/api/majors/:id",
                get(catalog::get_major::<S>)
                    .put(catalog::update_major::<S>)
                    .delete(catalog::delete_major::<S>),
            )
            .route(
                "/api/majors/:id/combinations",
                get(catalog::combinations_of_major::<S>).put(catalog::replace_combinations::<S>),
            )
            // Admission combinations
            .route("/api/combinations", post(catalog::add_combination::<S>))
            .route("/api/combinations/options", get(catalog::combination_options::<S>))
            .route(
                "/api/combinations/:id",
                get(catalog::get_combination::<S>).delete(catalog::delete_combination::<S>),
            )
            // Statistics
            .route("/api/stats", get(statistics::all::<S>))
            .route("/api/stats/schools", get(statistics::by_school::<S>))
            .route("/api/stats/majors", get(statistics::by_major::<S>))
            .route("/api/stats/statuses", get(statistics::by_status::<S>))
            .route("/api/dashboard", get(statistics::dashboard::<S>))
            // Students
            .route("/api/students/profile", get(students::profile::<S>))
            .route("/api/students/:id/registration", put(students::register::<S>))
            .route("/api/students/:id/profile", put(students::update_profile::<S>))
            .route("/api/students/:id/evidence", post(students::attach_evidence::<S>))
            .route(
                "/api/students/:id/evidence/:file_name",
                delete(students::remove_evidence::<S>),
            )
            // Health check
            .route("/health", get(health::health_check::<S>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> PortalResult<()> {
        let router = self.build_router();
        let bind_address: SocketAddr = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| PortalError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        info!(address = %bind_address, store = %self.state.store_url, "🌐 Portal listening on http://{}", bind_address);

        let state = Arc::clone(&self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
                    Err(err) => logging::log_error("Signal handling", &err),
                }
                state.set_running(false);
            })
            .await
            .map_err(|e| PortalError::ServerStartup(format!("Server error: {e}")))?;

        Ok(())
    }
}
