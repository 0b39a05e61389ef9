//! Common types and errors for the LikeGraph posting-time analyzer

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{LikeGraphError, Result};
pub use types::*;
pub use utils::{round2, weekday_index, weekday_name};
