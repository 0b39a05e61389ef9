//! Common types used across the LikeGraph pipeline

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;

/// Field holding the post timestamp in the source export
pub const DATE_FIELD: &str = "Date";

/// Field holding the like count in the source export
pub const LIKES_FIELD: &str = "Like(s)";

/// One unparsed post's key/value fields as extracted from the text export,
/// before any type casting
pub type RawRecord = HashMap<String, String>;

/// One post after timezone conversion and type casting, with derived
/// temporal attributes
///
/// `day_of_week` and `hour` drive the aggregation; `time`, `time_period`
/// and `hour_12` are presentational.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    /// Post instant converted into the caller-supplied timezone
    pub date: DateTime<Tz>,
    /// Like count for the post
    #[serde(rename = "Likes")]
    pub likes: u32,
    /// Full weekday name in the converted zone (e.g. "Monday")
    pub day_of_week: String,
    /// Wall-clock time of day in the converted zone
    pub time: NaiveTime,
    /// "AM" or "PM"
    pub time_period: String,
    /// Hour of day, 0-23, in the converted zone
    pub hour: u32,
    /// Zero-padded 12-hour clock hour, "01" through "12"
    pub hour_12: String,
}

/// Mean-likes matrix keyed by (day of week, hour of day)
///
/// Rows are the observed weekday names in Monday-first order, columns the
/// observed hours in ascending order. A cell is `None` when no posts fall
/// in that (day, hour) bucket; it is absent, not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatMatrix {
    /// Row labels: observed weekday names, Monday first
    pub days: Vec<String>,
    /// Column labels: observed hours of day, ascending
    pub hours: Vec<u32>,
    /// `cells[row][col]` = mean likes for (days[row], hours[col]),
    /// rounded to 2 decimal places
    pub cells: Vec<Vec<Option<f64>>>,
}

impl HeatMatrix {
    /// Look up the mean-likes cell for a weekday name and hour
    pub fn get(&self, day: &str, hour: u32) -> Option<f64> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.hours.iter().position(|h| *h == hour)?;
        self.cells[row][col]
    }
}

/// Scalar summary metrics over the whole row table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikesSummary {
    /// Sum of likes across all posts
    pub total_likes: u64,
    /// Mean likes per post, rounded to 2 decimal places
    pub average_likes: f64,
}

/// Everything the aggregation step hands to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateOutput {
    /// Timezone the data is displayed in (canonical IANA name)
    pub timezone: String,
    /// Row-per-post table with derived temporal columns
    pub table: Vec<PostRecord>,
    /// Day-of-week x hour-of-day mean-likes matrix
    pub matrix: HeatMatrix,
    /// Total and average likes over the table
    pub summary: LikesSummary,
}
