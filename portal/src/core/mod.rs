//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod aggregation;
pub mod search;

// Re-export commonly used functions
pub use aggregation::{dashboard_summary, stats_by_major, stats_by_school, stats_by_status};
pub use search::{filter_applications, normalize_keyword};
