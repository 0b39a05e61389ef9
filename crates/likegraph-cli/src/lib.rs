//! Command-line presentation layer for the LikeGraph posting-time analyzer
//!
//! All aggregation logic lives in `likegraph-core`; this crate only reads
//! input, resolves settings, and renders the output.

pub mod config;
pub mod render;

pub use config::{Settings, DEFAULT_TIMEZONE};
pub use render::{render_matrix, render_summary, render_table, render_text};
