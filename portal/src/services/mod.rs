//! Service implementations
//!
//! Each service wraps store calls and answers with an `Envelope`. Store
//! errors are logged here and collapsed into the generic failure.

pub mod applications;
pub mod catalog;
pub mod rest_store;
pub mod statistics;
pub mod student;

#[cfg(test)]
pub mod tests;

use shared::{Envelope, logging};
use crate::error::PortalResult;

// Re-export service implementations
pub use applications::ApplicationService;
pub use catalog::CatalogService;
pub use rest_store::RealAdmissionsStore;
pub use statistics::StatisticsService;
pub use student::{RetryPolicy, StudentService};

/// Turn a store result into an envelope; failures carry `T::default()`
pub(crate) fn respond<T: Default>(operation: &str, success_message: &str, result: PortalResult<T>) -> Envelope<T> {
    match result {
        Ok(data) => Envelope::ok(success_message, data),
        Err(error) => {
            logging::log_error(operation, &error);
            Envelope::failure()
        }
    }
}
