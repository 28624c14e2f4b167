//! Schools, majors and admission combinations

use axum::{
    extract::{Path, State},
    response::Json,
};

use shared::{Combination, CombinationDetails, EntityId, Envelope, Major, MajorDetails, School, SchoolDetails};
use crate::portal_impl::Portal;
use crate::traits::AdmissionsStore;
use crate::types::{CombinationChoice, CombinationOption};

pub async fn list_schools<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<School>>> {
    Json(portal.catalog().get_all_schools().await)
}

pub async fn get_school<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<Option<School>>> {
    Json(portal.catalog().get_school_by_id(id).await)
}

pub async fn add_school<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Json(details): Json<SchoolDetails>,
) -> Json<Envelope<Option<School>>> {
    Json(portal.catalog().add_school(&details).await)
}

pub async fn update_school<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(details): Json<SchoolDetails>,
) -> Json<Envelope<Option<School>>> {
    Json(portal.catalog().update_school(id, &details).await)
}

pub async fn delete_school<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<()>> {
    Json(portal.catalog().delete_school(id).await)
}

pub async fn majors_of_school<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(school_id): Path<EntityId>,
) -> Json<Envelope<Vec<Major>>> {
    Json(portal.catalog().get_majors_by_school(school_id).await)
}

pub async fn list_majors<S: AdmissionsStore>(State(portal): State<Portal<S>>) -> Json<Envelope<Vec<Major>>> {
    Json(portal.catalog().get_all_majors().await)
}

pub async fn get_major<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<Option<Major>>> {
    Json(portal.catalog().get_major_by_id(id).await)
}

pub async fn add_major<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Json(details): Json<MajorDetails>,
) -> Json<Envelope<Option<Major>>> {
    Json(portal.catalog().add_major(&details).await)
}

pub async fn update_major<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
    Json(details): Json<MajorDetails>,
) -> Json<Envelope<Option<Major>>> {
    Json(portal.catalog().update_major(id, &details).await)
}

pub async fn delete_major<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<()>> {
    Json(portal.catalog().delete_major(id).await)
}

pub async fn combinations_of_major<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(major_id): Path<EntityId>,
) -> Json<Envelope<Vec<Combination>>> {
    Json(portal.catalog().get_combinations_by_major(major_id).await)
}

pub async fn replace_combinations<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(major_id): Path<EntityId>,
    Json(choices): Json<Vec<CombinationChoice>>,
) -> Json<Envelope<Vec<Combination>>> {
    Json(portal.catalog().update_combinations_for_major(major_id, &choices).await)
}

pub async fn add_combination<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Json(details): Json<CombinationDetails>,
) -> Json<Envelope<Option<Combination>>> {
    Json(portal.catalog().add_combination(&details).await)
}

pub async fn get_combination<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<Option<Combination>>> {
    Json(portal.catalog().get_combination_by_id(id).await)
}

pub async fn delete_combination<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
    Path(id): Path<EntityId>,
) -> Json<Envelope<()>> {
    Json(portal.catalog().delete_combination(id).await)
}

pub async fn combination_options<S: AdmissionsStore>(
    State(portal): State<Portal<S>>,
) -> Json<Envelope<Vec<CombinationOption>>> {
    Json(portal.catalog().combination_options())
}
