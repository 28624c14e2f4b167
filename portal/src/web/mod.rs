//! HTTP surface of the portal
//!
//! Handlers answer with the service envelope as JSON. A failed envelope is
//! still a 200; only malformed requests produce error statuses.

pub mod handlers;
