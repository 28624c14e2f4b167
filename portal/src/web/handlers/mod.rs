//! Route handlers grouped by resource

pub mod applications;
pub mod catalog;
pub mod health;
pub mod statistics;
pub mod students;
