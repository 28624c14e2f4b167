//! Type definitions for the portal API
//!
//! Request bodies the UI sends and composite payloads the portal returns.
//! Domain records themselves live in `shared`.

use serde::{Deserialize, Serialize};

use shared::{Application, ApplicationStatus, Combination, EntityId, Major, School, StatEntry};

/// Headline counters for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_schools: u64,
    pub total_applications: u64,
    pub pending_applications: u64,
}

/// The three statistics views, fetched together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsBundle {
    pub by_school: Vec<StatEntry>,
    pub by_major: Vec<StatEntry>,
    pub by_status: Vec<StatEntry>,
}

/// A student's application with its resolved references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub application: Application,
    pub status_label: String,
    pub school: Option<School>,
    pub major: Option<Major>,
    pub combination: Option<Combination>,
}

/// Entry of the fixed admission-combination catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationOption {
    pub code: String,
    pub subjects: String,
}

/// Replacement entry for a major's combinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationChoice {
    pub code: String,
    pub subjects: String,
    #[serde(default)]
    pub minimum_score: Option<f64>,
    #[serde(default)]
    pub quota: Option<u32>,
}

/// Administrator decision on an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// Student's school/major/combination choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub school_id: EntityId,
    pub major_id: EntityId,
    #[serde(default, with = "shared::identifier::reference_format")]
    pub combination_id: Option<EntityId>,
}

/// Personal fields a student may edit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub birth_date: String,
    pub gender: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub exam_score: f64,
    #[serde(default)]
    pub priority_group: String,
}

impl ProfileUpdate {
    /// Overwrite the personal fields of `application`
    pub fn apply_to(self, application: &mut Application) {
        application.full_name = self.full_name;
        application.birth_date = self.birth_date;
        application.gender = self.gender;
        application.national_id = self.national_id;
        application.email = self.email;
        application.phone = self.phone;
        application.exam_score = self.exam_score;
        application.priority_group = self.priority_group;
    }
}

/// File to register as evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceUpload {
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Which student is asking; either field identifies the record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileQuery {
    pub email: Option<String>,
    pub id: Option<EntityId>,
}
