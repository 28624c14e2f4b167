//! Shared types for the admissions portal
//!
//! Holds the admissions data model as it travels to and from the data store,
//! the uniform result envelope returned by every portal operation, and the
//! logging setup used by the portal binary.

pub mod envelope;
pub mod errors;
pub mod evidence;
pub mod identifier;
pub mod logging;
pub mod types;

pub use envelope::*;
pub use errors::*;
pub use evidence::{EvidenceFile, EvidenceFiles};
pub use identifier::EntityId;
pub use types::*;
