//! Shared error types for the admissions portal

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid identifier: {input}")]
    InvalidIdentifier { input: String },

    #[error("Unknown application status: {input}")]
    InvalidStatus { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
