//! Portal-specific error types
//!
//! These never reach the UI directly: service operations collapse them into a
//! failed envelope after logging. They surface as HTTP errors only during
//! startup and for malformed requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Store request failed for {resource}: {message}")]
    StoreTransport { resource: String, message: String },

    #[error("Store answered {status} for {resource}")]
    StoreStatus { resource: String, status: u16 },

    #[error("Store response for {resource} could not be decoded: {message}")]
    StoreDecode { resource: String, message: String },

    #[error("Evidence store rejected {file_name}: {message}")]
    EvidenceRejected { file_name: String, message: String },

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Invalid store URL: {url}")]
    InvalidStoreUrl { url: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl PortalError {
    pub fn transport(resource: &str, error: reqwest::Error) -> Self {
        Self::StoreTransport {
            resource: resource.to_string(),
            message: error.to_string(),
        }
    }

    pub fn decode(resource: &str, error: reqwest::Error) -> Self {
        Self::StoreDecode {
            resource: resource.to_string(),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = match self {
            PortalError::InvalidRequest { .. }
            | PortalError::SharedError(SharedError::InvalidStatus { .. }) => StatusCode::BAD_REQUEST,
            PortalError::StoreTransport { .. }
            | PortalError::StoreStatus { .. }
            | PortalError::StoreDecode { .. }
            | PortalError::EvidenceRejected { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
