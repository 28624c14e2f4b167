//! Service tests for the portal
//!
//! Services run against `MockAdmissionsStore`; no network involved.

pub mod applications;
pub mod catalog;
