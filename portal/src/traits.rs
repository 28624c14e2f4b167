//! Service trait definitions for dependency injection
//!
//! All data store I/O goes through `AdmissionsStore` so services can be
//! tested against mocks.

use async_trait::async_trait;

use shared::{
    Application, ApplicationStatus, Combination, CombinationDetails, EntityId, Major, MajorDetails,
    School, SchoolDetails,
};
use crate::error::PortalResult;

/// REST data store holding schools, majors, combinations and applications
#[mockall::automock]
#[async_trait]
pub trait AdmissionsStore: Send + Sync + 'static {
    /// GET all applications
    async fn list_applications(&self) -> PortalResult<Vec<Application>>;

    /// GET one application
    async fn get_application(&self, id: EntityId) -> PortalResult<Application>;

    /// PUT a full application record
    async fn replace_application(&self, id: EntityId, application: &Application) -> PortalResult<Application>;

    /// PATCH status and reviewer note
    async fn patch_application_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
        note: &str,
    ) -> PortalResult<Application>;

    async fn list_schools(&self) -> PortalResult<Vec<School>>;

    async fn get_school(&self, id: EntityId) -> PortalResult<School>;

    /// POST a school; the store assigns the identifier
    async fn create_school(&self, details: &SchoolDetails) -> PortalResult<School>;

    async fn replace_school(&self, id: EntityId, details: &SchoolDetails) -> PortalResult<School>;

    async fn delete_school(&self, id: EntityId) -> PortalResult<()>;

    async fn list_majors(&self) -> PortalResult<Vec<Major>>;

    async fn get_major(&self, id: EntityId) -> PortalResult<Major>;

    async fn create_major(&self, details: &MajorDetails) -> PortalResult<Major>;

    async fn replace_major(&self, id: EntityId, details: &MajorDetails) -> PortalResult<Major>;

    async fn delete_major(&self, id: EntityId) -> PortalResult<()>;

    async fn list_combinations(&self) -> PortalResult<Vec<Combination>>;

    async fn get_combination(&self, id: EntityId) -> PortalResult<Combination>;

    async fn create_combination(&self, details: &CombinationDetails) -> PortalResult<Combination>;

    async fn delete_combination(&self, id: EntityId) -> PortalResult<()>;

    /// Register an evidence file with the upload endpoint, returning its stored path
    async fn upload_evidence(&self, file_name: &str) -> PortalResult<String>;

    /// Remove an evidence file from the upload endpoint
    async fn delete_evidence(&self, file_name: &str) -> PortalResult<()>;
}
