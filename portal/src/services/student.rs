//! Student-facing operations on a single application record
//!
//! Every write fetches the current record first and PUTs the whole record
//! back; concurrent edits from another session are overwritten.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info, warn};

use shared::{Application, ApplicationStatus, EntityId, Envelope, status_label};
use crate::error::{PortalError, PortalResult};
use crate::services::respond;
use crate::traits::AdmissionsStore;
use crate::types::{ProfileUpdate, RegistrationRequest, StudentProfile};

pub const PROFILE_NOT_FOUND_MESSAGE: &str = "No application found for this student";

/// How often profile loading is retried while the record is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

pub struct StudentService<S> {
    store: Arc<S>,
    retry: RetryPolicy,
}

impl<S> Clone for StudentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            retry: self.retry,
        }
    }
}

impl<S: AdmissionsStore> StudentService<S> {
    pub fn new(store: Arc<S>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    /// Load the student's application with its school, major and combination.
    ///
    /// A record matches on email or on id. A missing record or a failed fetch
    /// is retried `max_retries` times with a fixed delay before giving up.
    pub async fn load_student_profile(
        &self,
        email: Option<&str>,
        id: Option<EntityId>,
    ) -> Envelope<Option<StudentProfile>> {
        let mut attempt = 0;
        loop {
            let outcome = self.find_application(email, id.as_ref()).await;

            match outcome {
                Ok(Some(application)) => {
                    let profile = self.resolve_profile(application).await;
                    return Envelope::ok("Loaded student profile", Some(profile));
                }
                Ok(None) | Err(_) if attempt < self.retry.max_retries => {
                    attempt += 1;
                    debug!(attempt, max = self.retry.max_retries, "student profile not ready, retrying");
                    tokio::time::sleep(self.retry.delay).await;
                }
                Ok(None) => {
                    warn!(?email, ?id, "no application found for student");
                    return Envelope::fail(PROFILE_NOT_FOUND_MESSAGE, None);
                }
                Err(error) => return respond("Load student profile", "", Err(error)),
            }
        }
    }

    async fn find_application(
        &self,
        email: Option<&str>,
        id: Option<&EntityId>,
    ) -> PortalResult<Option<Application>> {
        let applications = self.store.list_applications().await?;
        Ok(applications.into_iter().find(|application| {
            email.is_some_and(|email| application.email == email) || id == Some(&application.id)
        }))
    }

    /// Lookups run concurrently; a failed or unset reference leaves its slot empty
    async fn resolve_profile(&self, application: Application) -> StudentProfile {
        let school = async {
            match &application.school_id {
                Some(id) => self.store.get_school(id.clone()).await.ok(),
                None => None,
            }
        };
        let major = async {
            match &application.major_id {
                Some(id) => self.store.get_major(id.clone()).await.ok(),
                None => None,
            }
        };
        let combination = async {
            match &application.combination_id {
                Some(id) => self.store.get_combination(id.clone()).await.ok(),
                None => None,
            }
        };

        let (school, major, combination) = tokio::join!(school, major, combination);

        StudentProfile {
            status_label: status_label(application.status.get()).to_string(),
            application,
            school,
            major,
            combination,
        }
    }

    /// Record the student's choice and submit it for review
    pub async fn register_choice(
        &self,
        application_id: EntityId,
        choice: &RegistrationRequest,
    ) -> Envelope<Option<Application>> {
        let result = self
            .modify(application_id.clone(), |application| {
                application.school_id = Some(choice.school_id.clone());
                application.major_id = Some(choice.major_id.clone());
                application.combination_id = choice.combination_id.clone();
                application.status.set(ApplicationStatus::Pending);
                if application.submitted_at.is_empty() {
                    application.submitted_at = Local::now().format("%Y-%m-%d").to_string();
                }
            })
            .await;

        if result.is_ok() {
            info!(application = %application_id, school = %choice.school_id, major = %choice.major_id, "registration submitted");
        }
        respond("Register choice", "Registration submitted", result.map(Some))
    }

    pub async fn update_profile(&self, application_id: EntityId, profile: ProfileUpdate) -> Envelope<Option<Application>> {
        let result = self
            .modify(application_id, |application| profile.apply_to(application))
            .await;
        respond("Update profile", "Updated profile", result.map(Some))
    }

    /// Upload an evidence file and append its stored path to the record
    pub async fn attach_evidence(&self, application_id: EntityId, file_name: &str) -> Envelope<Option<Application>> {
        respond(
            "Attach evidence",
            "Evidence uploaded",
            self.attach(application_id, file_name).await.map(Some),
        )
    }

    async fn attach(&self, application_id: EntityId, file_name: &str) -> PortalResult<Application> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(PortalError::InvalidRequest {
                details: "evidence file name is empty".to_string(),
            });
        }

        let path = self.store.upload_evidence(file_name).await?;
        self.modify(application_id, |application| application.evidence.push(path))
            .await
    }

    /// Delete an evidence file and drop every entry with that exact name
    pub async fn remove_evidence(&self, application_id: EntityId, file_name: &str) -> Envelope<Option<Application>> {
        respond(
            "Remove evidence",
            "Evidence removed",
            self.detach(application_id, file_name).await.map(Some),
        )
    }

    async fn detach(&self, application_id: EntityId, file_name: &str) -> PortalResult<Application> {
        self.store.delete_evidence(file_name).await?;
        self.modify(application_id, |application| {
            let removed = application.evidence.remove_by_name(file_name);
            debug!(application = %application.id, file_name, removed, "evidence entries dropped");
        })
        .await
    }

    /// Fetch, edit in memory, PUT back
    async fn modify<F>(&self, application_id: EntityId, edit: F) -> PortalResult<Application>
    where
        F: FnOnce(&mut Application),
    {
        let mut application = self.store.get_application(application_id.clone()).await?;
        edit(&mut application);
        self.store.replace_application(application_id, &application).await
    }
}
