//! Uniform result envelope
//!
//! Every portal operation answers with `{success, message, data}`. Failures
//! carry the operation's empty value (`[]` for lists, `null` for single
//! records) and a generic message; the cause is only ever logged.

use serde::{Deserialize, Serialize};

/// Message used for every failed store interaction
pub const CONNECTION_FAILURE_MESSAGE: &str = "Failed to connect to the server";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn fail(message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            message: message.into(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Transform the payload, keeping outcome and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            data: f(self.data),
        }
    }
}

impl<T: Default> Envelope<T> {
    /// Generic failure with the operation's empty payload
    pub fn failure() -> Self {
        Self::fail(CONNECTION_FAILURE_MESSAGE, T::default())
    }
}
