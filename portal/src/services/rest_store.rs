//! REST client for the admissions data store
//!
//! Collection-style endpoints under one base URL. Any transport failure,
//! non-2xx status or undecodable body is an error; callers decide how to
//! surface it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use shared::{
    Application, ApplicationStatus, Combination, CombinationDetails, EntityId, Major, MajorDetails,
    School, SchoolDetails,
};
use crate::error::{PortalError, PortalResult};
use crate::traits::AdmissionsStore;

const APPLICATIONS: &str = "ho_so";
const SCHOOLS: &str = "truong";
const MAJORS: &str = "nganh";
const COMBINATIONS: &str = "to_hop_xet_tuyen";
const EVIDENCE_UPLOAD: &str = "upload-minh-chung";
const EVIDENCE: &str = "minh-chung";

/// Body of the evidence endpoints' answers; `data` is only sent on upload
#[derive(Deserialize)]
struct EvidenceReply {
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<UploadedFile>,
}

#[derive(Deserialize)]
struct UploadedFile {
    #[serde(rename = "filePath")]
    file_path: String,
}

/// Real store client over HTTP
#[derive(Clone)]
pub struct RealAdmissionsStore {
    client: Client,
    base_url: Url,
}

impl RealAdmissionsStore {
    /// Create a client; `timeout` of `None` keeps the transport default
    pub fn new(base_url: Url, timeout: Option<Duration>) -> PortalResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(PortalError::InvalidStoreUrl {
                url: base_url.to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PortalError::ServerStartup(format!("HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> PortalResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortalError::InvalidStoreUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn record(&self, collection: &str, id: &EntityId) -> PortalResult<Url> {
        self.endpoint(&[collection, &id.to_string()])
    }

    async fn send(&self, request: RequestBuilder, resource: &str) -> PortalResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| PortalError::transport(resource, e))?;

        let status = response.status();
        debug!(resource, status = status.as_u16(), "store response");

        if !status.is_success() {
            return Err(PortalError::StoreStatus {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, resource: &str) -> PortalResult<T> {
        self.send(request, resource)
            .await?
            .json::<T>()
            .await
            .map_err(|e| PortalError::decode(resource, e))
    }

    async fn get_all<T: DeserializeOwned>(&self, collection: &str) -> PortalResult<Vec<T>> {
        let url = self.endpoint(&[collection])?;
        self.fetch(self.client.get(url), collection).await
    }

    async fn get_one<T: DeserializeOwned>(&self, collection: &str, id: EntityId) -> PortalResult<T> {
        let url = self.record(collection, &id)?;
        self.fetch(self.client.get(url), collection).await
    }

    async fn remove(&self, collection: &str, id: EntityId) -> PortalResult<()> {
        let url = self.record(collection, &id)?;
        self.send(self.client.delete(url), collection).await?;
        Ok(())
    }
}

#[async_trait]
impl AdmissionsStore for RealAdmissionsStore {
    async fn list_applications(&self) -> PortalResult<Vec<Application>> {
        self.get_all(APPLICATIONS).await
    }

    async fn get_application(&self, id: EntityId) -> PortalResult<Application> {
        self.get_one(APPLICATIONS, id).await
    }

    async fn replace_application(&self, id: EntityId, application: &Application) -> PortalResult<Application> {
        let url = self.record(APPLICATIONS, &id)?;
        self.fetch(self.client.put(url).json(application), APPLICATIONS).await
    }

    async fn patch_application_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
        note: &str,
    ) -> PortalResult<Application> {
        let url = self.record(APPLICATIONS, &id)?;
        let body = json!({ "trang_thai": status, "ghi_chu": note });
        self.fetch(self.client.patch(url).json(&body), APPLICATIONS).await
    }

    async fn list_schools(&self) -> PortalResult<Vec<School>> {
        self.get_all(SCHOOLS).await
    }

    async fn get_school(&self, id: EntityId) -> PortalResult<School> {
        self.get_one(SCHOOLS, id).await
    }

    async fn create_school(&self, details: &SchoolDetails) -> PortalResult<School> {
        let url = self.endpoint(&[SCHOOLS])?;
        self.fetch(self.client.post(url).json(details), SCHOOLS).await
    }

    async fn replace_school(&self, id: EntityId, details: &SchoolDetails) -> PortalResult<School> {
        let url = self.record(SCHOOLS, &id)?;
        let body = School { id, details: details.clone() };
        self.fetch(self.client.put(url).json(&body), SCHOOLS).await
    }

    async fn delete_school(&self, id: EntityId) -> PortalResult<()> {
        self.remove(SCHOOLS, id).await
    }

    async fn list_majors(&self) -> PortalResult<Vec<Major>> {
        self.get_all(MAJORS).await
    }

    async fn get_major(&self, id: EntityId) -> PortalResult<Major> {
        self.get_one(MAJORS, id).await
    }

    async fn create_major(&self, details: &MajorDetails) -> PortalResult<Major> {
        let url = self.endpoint(&[MAJORS])?;
        self.fetch(self.client.post(url).json(details), MAJORS).await
    }

    async fn replace_major(&self, id: EntityId, details: &MajorDetails) -> PortalResult<Major> {
        let url = self.record(MAJORS, &id)?;
        let body = Major { id, details: details.clone() };
        self.fetch(self.client.put(url).json(&body), MAJORS).await
    }

    async fn delete_major(&self, id: EntityId) -> PortalResult<()> {
        self.remove(MAJORS, id).await
    }

    async fn list_combinations(&self) -> PortalResult<Vec<Combination>> {
        self.get_all(COMBINATIONS).await
    }

    async fn get_combination(&self, id: EntityId) -> PortalResult<Combination> {
        self.get_one(COMBINATIONS, id).await
    }

    async fn create_combination(&self, details: &CombinationDetails) -> PortalResult<Combination> {
        let url = self.endpoint(&[COMBINATIONS])?;
        self.fetch(self.client.post(url).json(details), COMBINATIONS).await
    }

    async fn delete_combination(&self, id: EntityId) -> PortalResult<()> {
        self.remove(COMBINATIONS, id).await
    }

    async fn upload_evidence(&self, file_name: &str) -> PortalResult<String> {
        let url = self.endpoint(&[EVIDENCE_UPLOAD])?;
        let body = json!({ "fileName": file_name });
        let reply: EvidenceReply = self
            .fetch(self.client.post(url).json(&body), EVIDENCE_UPLOAD)
            .await?;

        match reply {
            EvidenceReply {
                success: true,
                data: Some(file),
                ..
            } => Ok(file.file_path),
            EvidenceReply { message, .. } => Err(PortalError::EvidenceRejected {
                file_name: file_name.to_string(),
                message,
            }),
        }
    }

    async fn delete_evidence(&self, file_name: &str) -> PortalResult<()> {
        let url = self.endpoint(&[EVIDENCE, file_name])?;
        let reply: EvidenceReply = self.fetch(self.client.delete(url), EVIDENCE).await?;

        if reply.success {
            Ok(())
        } else {
            Err(PortalError::EvidenceRejected {
                file_name: file_name.to_string(),
                message: reply.message,
            })
        }
    }
}
