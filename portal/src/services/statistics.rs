//! Statistics over a fresh snapshot of the store

use std::sync::Arc;

use shared::{Envelope, StatEntry};
use crate::core::aggregation;
use crate::error::PortalResult;
use crate::services::respond;
use crate::traits::AdmissionsStore;
use crate::types::{DashboardSummary, StatisticsBundle};

pub struct StatisticsService<S> {
    store: Arc<S>,
}

impl<S> Clone for StatisticsService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AdmissionsStore> StatisticsService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn school_stats(&self) -> PortalResult<Vec<StatEntry>> {
        let (applications, schools) =
            tokio::try_join!(self.store.list_applications(), self.store.list_schools())?;
        Ok(aggregation::stats_by_school(&applications, &schools))
    }

    async fn major_stats(&self) -> PortalResult<Vec<StatEntry>> {
        let (applications, majors) =
            tokio::try_join!(self.store.list_applications(), self.store.list_majors())?;
        Ok(aggregation::stats_by_major(&applications, &majors))
    }

    pub async fn stats_by_school(&self) -> Envelope<Vec<StatEntry>> {
        respond("School statistics", "Loaded school statistics", self.school_stats().await)
    }

    pub async fn stats_by_major(&self) -> Envelope<Vec<StatEntry>> {
        respond("Major statistics", "Loaded major statistics", self.major_stats().await)
    }

    pub async fn stats_by_status(&self) -> Envelope<Vec<StatEntry>> {
        let result = self
            .store
            .list_applications()
            .await
            .map(|applications| aggregation::stats_by_status(&applications));
        respond("Status statistics", "Loaded status statistics", result)
    }

    /// All three views computed from one snapshot of each collection
    pub async fn all_stats(&self) -> Envelope<StatisticsBundle> {
        let result = tokio::try_join!(
            self.store.list_applications(),
            self.store.list_schools(),
            self.store.list_majors(),
        )
        .map(|(applications, schools, majors)| StatisticsBundle {
            by_school: aggregation::stats_by_school(&applications, &schools),
            by_major: aggregation::stats_by_major(&applications, &majors),
            by_status: aggregation::stats_by_status(&applications),
        });
        respond("Statistics", "Loaded statistics", result)
    }

    pub async fn dashboard_summary(&self) -> Envelope<DashboardSummary> {
        let result = tokio::try_join!(self.store.list_applications(), self.store.list_schools())
            .map(|(applications, schools)| aggregation::dashboard_summary(&applications, &schools));
        respond("Dashboard summary", "Loaded dashboard summary", result)
    }
}
