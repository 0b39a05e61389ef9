//! Plain-text rendering of aggregation output
//!
//! The core returns pure data; everything visual lives here. Mirrors the
//! original analyzer's display surface: processed table, heatmap, summary
//! metrics, and the active timezone.

use likegraph_common::{AggregateOutput, HeatMatrix, LikesSummary, PostRecord};
use std::fmt::Write;

/// Render the row-per-post table
pub fn render_table(table: &[PostRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<25} {:>6}  {:<11} {:<8} {:<6} {:>4} {:>7}",
        "date", "Likes", "day_of_week", "time", "period", "hour", "hour_12"
    );
    for row in table {
        let _ = writeln!(
            out,
            "{:<25} {:>6}  {:<11} {:<8} {:<6} {:>4} {:>7}",
            row.date.format("%Y-%m-%d %H:%M:%S %Z"),
            row.likes,
            row.day_of_week,
            row.time.format("%H:%M:%S"),
            row.time_period,
            row.hour,
            row.hour_12,
        );
    }
    out
}

/// Render the day-of-week x hour-of-day mean-likes grid
///
/// Absent buckets print as "-" so they stay visually distinct from a
/// genuine zero mean.
pub fn render_matrix(matrix: &HeatMatrix) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<10}", "");
    for hour in &matrix.hours {
        let _ = write!(out, " {:>7}", hour);
    }
    out.push('\n');

    for (row_index, day) in matrix.days.iter().enumerate() {
        let _ = write!(out, "{:<10}", day);
        for cell in &matrix.cells[row_index] {
            match cell {
                Some(mean) => {
                    let _ = write!(out, " {:>7.2}", mean);
                }
                None => {
                    let _ = write!(out, " {:>7}", "-");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render the summary metrics block
pub fn render_summary(summary: &LikesSummary) -> String {
    format!(
        "Total Likes: {}\nAverage Likes: {:.2}\n",
        summary.total_likes, summary.average_likes
    )
}

/// Render the full text report
pub fn render_text(output: &AggregateOutput, show_table: bool) -> String {
    let mut out = String::new();
    if show_table {
        out.push_str("Processed Data\n");
        out.push_str(&render_table(&output.table));
        out.push('\n');
    }
    out.push_str("Likes Distribution Heatmap\n");
    out.push_str(&render_matrix(&output.matrix));
    out.push('\n');
    out.push_str("Summary Statistics\n");
    out.push_str(&render_summary(&output.summary));
    out.push('\n');
    let _ = writeln!(out, "Data displayed in: {}", output.timezone);
    out
}
