//! API layer
//!
//! The request engine (one logical HTTP operation with timeout, linear-backoff
//! retry, and bearer-token injection) and the JSON envelope/entity models the
//! backend speaks.

pub mod client;
pub mod models;
