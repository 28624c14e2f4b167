//! Schools, majors and admission combinations
//!
//! Identifiers are assigned by the store on create; the portal never computes
//! them.

use std::sync::Arc;

use tracing::{info, warn};

use shared::{
    Combination, CombinationDetails, EntityId, Envelope, Major, MajorDetails, School, SchoolDetails,
    logging,
};
use crate::error::PortalResult;
use crate::services::respond;
use crate::traits::AdmissionsStore;
use crate::types::{CombinationChoice, CombinationOption};

/// Combinations offered when editing a major
const COMBINATION_CATALOGUE: [(&str, &str); 8] = [
    ("A00", "Math+Physics+Chemistry"),
    ("A01", "Math+Physics+English"),
    ("B00", "Math+Chemistry+Biology"),
    ("C00", "Literature+History+Geography"),
    ("D01", "Math+Literature+English"),
    ("D07", "Math+Chemistry+English"),
    ("D08", "Math+Biology+English"),
    ("D14", "Literature+English+Civics"),
];

pub struct CatalogService<S> {
    store: Arc<S>,
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AdmissionsStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get_all_schools(&self) -> Envelope<Vec<School>> {
        respond("List schools", "Loaded schools", self.store.list_schools().await)
    }

    pub async fn get_school_by_id(&self, id: EntityId) -> Envelope<Option<School>> {
        respond("Load school", "Loaded school", self.store.get_school(id).await.map(Some))
    }

    pub async fn add_school(&self, details: &SchoolDetails) -> Envelope<Option<School>> {
        let result = self.store.create_school(details).await;
        if let Ok(school) = &result {
            info!(school = %school.id, code = %school.details.code, "school created");
        }
        respond("Add school", "Added school", result.map(Some))
    }

    pub async fn update_school(&self, id: EntityId, details: &SchoolDetails) -> Envelope<Option<School>> {
        respond(
            "Update school",
            "Updated school",
            self.store.replace_school(id, details).await.map(Some),
        )
    }

    pub async fn delete_school(&self, id: EntityId) -> Envelope<()> {
        respond("Delete school", "Deleted school", self.store.delete_school(id).await)
    }

    pub async fn get_all_majors(&self) -> Envelope<Vec<Major>> {
        respond("List majors", "Loaded majors", self.store.list_majors().await)
    }

    /// Majors of one school, filtered after fetching the whole collection
    pub async fn get_majors_by_school(&self, school_id: EntityId) -> Envelope<Vec<Major>> {
        let result = self.store.list_majors().await.map(|majors| {
            majors
                .into_iter()
                .filter(|major| major.details.school_id.as_ref() == Some(&school_id))
                .collect()
        });
        respond("List majors of school", "Loaded majors", result)
    }

    pub async fn get_major_by_id(&self, id: EntityId) -> Envelope<Option<Major>> {
        respond("Load major", "Loaded major", self.store.get_major(id).await.map(Some))
    }

    pub async fn add_major(&self, details: &MajorDetails) -> Envelope<Option<Major>> {
        respond("Add major", "Added major", self.store.create_major(details).await.map(Some))
    }

    pub async fn update_major(&self, id: EntityId, details: &MajorDetails) -> Envelope<Option<Major>> {
        respond(
            "Update major",
            "Updated major",
            self.store.replace_major(id, details).await.map(Some),
        )
    }

    pub async fn delete_major(&self, id: EntityId) -> Envelope<()> {
        respond("Delete major", "Deleted major", self.store.delete_major(id).await)
    }

    async fn combinations_of(&self, major_id: &EntityId) -> PortalResult<Vec<Combination>> {
        Ok(self
            .store
            .list_combinations()
            .await?
            .into_iter()
            .filter(|combination| combination.details.major_id.as_ref() == Some(major_id))
            .collect())
    }

    pub async fn get_combinations_by_major(&self, major_id: EntityId) -> Envelope<Vec<Combination>> {
        respond(
            "List combinations of major",
            "Loaded admission combinations",
            self.combinations_of(&major_id).await,
        )
    }

    pub async fn get_combination_by_id(&self, id: EntityId) -> Envelope<Option<Combination>> {
        respond(
            "Load combination",
            "Loaded admission combination",
            self.store.get_combination(id).await.map(Some),
        )
    }

    pub async fn add_combination(&self, details: &CombinationDetails) -> Envelope<Option<Combination>> {
        respond(
            "Add combination",
            "Added admission combination",
            self.store.create_combination(details).await.map(Some),
        )
    }

    pub async fn delete_combination(&self, id: EntityId) -> Envelope<()> {
        respond(
            "Delete combination",
            "Deleted admission combination",
            self.store.delete_combination(id).await,
        )
    }

    /// Replace every combination of a major.
    ///
    /// Old combinations are deleted first, then each choice is created in
    /// order. Individual delete or create failures are logged and skipped;
    /// only the records actually created are returned. Not atomic.
    pub async fn update_combinations_for_major(
        &self,
        major_id: EntityId,
        choices: &[CombinationChoice],
    ) -> Envelope<Vec<Combination>> {
        respond(
            "Replace combinations of major",
            "Updated admission combinations",
            self.replace_combinations(major_id, choices).await,
        )
    }

    async fn replace_combinations(
        &self,
        major_id: EntityId,
        choices: &[CombinationChoice],
    ) -> PortalResult<Vec<Combination>> {
        for existing in self.combinations_of(&major_id).await? {
            if let Err(error) = self.store.delete_combination(existing.id).await {
                logging::log_warning("Delete old combination", &error);
            }
        }

        let mut created = Vec::with_capacity(choices.len());
        for choice in choices {
            let details = CombinationDetails {
                major_id: Some(major_id.clone()),
                code: choice.code.clone(),
                subjects: choice.subjects.clone(),
                minimum_score: choice.minimum_score,
                quota: choice.quota,
            };
            match self.store.create_combination(&details).await {
                Ok(combination) => created.push(combination),
                Err(error) => warn!(code = %choice.code, %error, "could not create combination"),
            }
        }
        Ok(created)
    }

    /// Fixed catalogue; never touches the store
    pub fn combination_options(&self) -> Envelope<Vec<CombinationOption>> {
        let options = COMBINATION_CATALOGUE
            .iter()
            .map(|(code, subjects)| CombinationOption {
                code: code.to_string(),
                subjects: subjects.to_string(),
            })
            .collect();
        Envelope::ok("Loaded admission combination options", options)
    }
}
