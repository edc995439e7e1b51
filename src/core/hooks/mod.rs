//! Data-access hooks
//!
//! Stateful wrappers over async envelope producers. Each hook owns its state
//! exclusively and mutates it only through its own `&mut self` methods;
//! failures surface as `error` state, never as a propagated error.

pub mod auth;
pub mod fetch;
pub mod list;
pub mod mutation;

pub use auth::AuthHook;
pub use fetch::FetchHook;
pub use list::ListHook;
pub use mutation::{MutationCallbacks, MutationHook};
