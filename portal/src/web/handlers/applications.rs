//! Application review endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use shared::{Application, EntityId, Envelope};
use crate::portal_impl::Portal;
use crate::traits::AdmissionsStore;
use crate::types::{SearchParams, StatusUpdateRequest};

pub async fn list<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<Application>>> {
    Json(portal.applications().get_all_applications().await)
}

/// `204 No Content` when the keyword is blank
pub async fn search<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Query(params): Query<SearchParams>,
) -> Response {
    match portal.applications().search_applications(&params.q).await {
        Some(envelope) => Json(envelope).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn get_one<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.applications().get_application_by_id(id).await)
}

pub async fn replace<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(application): Json<Application>,
) -> Json<Envelope<Option<Application>>> {
    Json(portal.applications().update_application(id, &application).await)
}

pub async fn update_status<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(request): Json<StatusUpdateRequest>,
) -> Json<Envelope<Option<Application>>> {
    Json(
        portal
            .applications()
            .update_application_status(id, request.status, request.note.as_deref())
            .await,
    )
}
