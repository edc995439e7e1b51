pub use error::AppError;

/// Main architecture layers (dependency flow: Core → API → Storage)
pub mod core; // Hooks and per-entity services
pub mod storage; // Configuration and token persistence

/// Support modules (used across layers)
pub mod api; // HTTP request engine and response envelopes
pub mod error; // Error handling

pub type Result<T> = std::result::Result<T, AppError>;
