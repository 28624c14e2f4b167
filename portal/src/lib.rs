//! Admissions portal library
//!
//! Back end for the admissions UI: reads and writes applications, schools,
//! majors and admission combinations in the REST data store, computes
//! statistics, and serves everything as JSON envelopes.

pub mod config;
pub mod core;
pub mod error;
pub mod portal_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::{Args, PortalConfig};
pub use error::{PortalError, PortalResult};
pub use portal_impl::Portal;
pub use state::PortalState;
pub use types::*;

// Re-export trait definitions
pub use traits::AdmissionsStore;

// Re-export service implementations
pub use services::{
    ApplicationService, CatalogService, RealAdmissionsStore, RetryPolicy, StatisticsService, StudentService,
};
