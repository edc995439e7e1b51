//! Core layer - Data-access hooks and per-entity services
//!
//! Services translate entity operations into engine calls; hooks wrap the
//! resulting envelopes in re-invocable loading/error/data state for
//! presentation code.

pub mod hooks;
pub mod services;
