//! Record extraction and timezone-aware like aggregation for LikeGraph
//!
//! The pipeline is a linear pair of components: [`extract`] turns a raw
//! text export into a sequence of flat key/value records, and [`aggregate`]
//! validates those records, converts their timestamps into a chosen IANA
//! timezone, and buckets mean likes by day-of-week and hour-of-day.

pub mod aggregate;
pub mod extract;

pub use aggregate::{aggregate, resolve_zone};
pub use extract::{extract, RecordExtractor, TERMINATOR_PREFIX};
