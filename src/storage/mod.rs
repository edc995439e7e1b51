//! Storage layer
//!
//! Configuration management (TOML) and pluggable bearer-token persistence.
//! The default token store is in-memory; the keyring-backed store uses the
//! OS credential service.

pub mod config;
pub mod credentials;
