//! Student self-service endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use shared::{Application, EntityId, Envelope};
use crate::error::{PortalError, PortalResult};
use crate::portal_impl::Portal;
use crate::traits::AdmissionsStore;
use crate::types::{EvidenceUpload, ProfileQuery, ProfileUpdate, RegistrationRequest, StudentProfile};

/// Needs `email` or `id`; a query with neither is a bad request
pub async fn profile<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Query(query): Query<ProfileQuery>,
) -> PortalResult<Json<Envelope<Option<StudentProfile>>>> {
    let email = query.email.as_deref().map(str::trim).filter(|email| !email.is_empty());
    if email.is_none() && query.id.is_none() {
        return Err(PortalError::InvalidRequest {
            details: "email or id is required".to_string(),
        });
    }

    Ok(Json(portal.students().load_student_profile(email, query.id).await))
}

pub async fn register<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(request): Json<RegistrationRequest>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.students().register_choice(id, &request).await)
}

pub async fn update_profile<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(profile): Json<ProfileUpdate>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.students().update_profile(id, profile).await)
}

pub async fn attach_evidence<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(upload): Json<EvidenceUpload>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.students().attach_evidence(id, &upload.file_name).await)
}

pub async fn remove_evidence<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path((id, file_name)): Path<(EntityId, String)>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.students().remove_evidence(id, &file_name).await)
}
