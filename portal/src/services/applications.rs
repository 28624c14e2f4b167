//! Application records: listing, review decisions and keyword search

use std::sync::Arc;

use tracing::info;

use shared::{Application, ApplicationStatus, EntityId, Envelope};
use crate::core::search;
use crate::services::respond;
use crate::traits::AdmissionsStore;

pub struct ApplicationService<S> {
    store: Arc<S>,
}

impl<S> Clone for ApplicationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AdmissionsStore> ApplicationService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get_all_applications(&self) -> Envelope<Vec<Application>> {
        respond(
            "List applications",
            "Loaded applications",
            self.store.list_applications().await,
        )
    }

    pub async fn get_application_by_id(&self, id: EntityId) -> Envelope<Option<Application>> {
        respond(
            "Load application",
            "Loaded application",
            self.store.get_application(id).await.map(Some),
        )
    }

    /// Record an administrator decision. A missing note is stored as empty.
    ///
    /// Terminal statuses are not protected: a rejected application can be
    /// moved back to pending if the caller asks for it.
    pub async fn update_application_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
        note: Option<&str>,
    ) -> Envelope<Option<Application>> {
        let note = note.unwrap_or_default();
        let result = self.store.patch_application_status(id.clone(), status, note).await;

        if result.is_ok() {
            info!(application = %id, status = %status, "application status updated");
        }
        respond("Update application status", "Updated application status", result.map(Some))
    }

    pub async fn update_application(&self, id: EntityId, application: &Application) -> Envelope<Option<Application>> {
        respond(
            "Update application",
            "Updated application",
            self.store.replace_application(id, application).await.map(Some),
        )
    }

    /// Keyword search over all applications.
    ///
    /// Returns `None` without touching the store when the keyword is blank.
    pub async fn search_applications(&self, keyword: &str) -> Option<Envelope<Vec<Application>>> {
        let keyword = search::normalize_keyword(keyword)?;

        let result = self
            .store
            .list_applications()
            .await
            .map(|applications| search::filter_applications(applications, keyword));

        Some(respond("Search applications", "Search completed", result))
    }
}
