//! Timezone-aware aggregation of extracted post records
//!
//! Validation is all-or-nothing: a single record with a missing field, an
//! unparseable date, or a non-numeric like count fails the whole batch and
//! no partial output is produced.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use likegraph_common::{
    round2, weekday_index, weekday_name, AggregateOutput, HeatMatrix, LikeGraphError,
    LikesSummary, PostRecord, RawRecord, Result, DATE_FIELD, LIKES_FIELD,
};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Wall-clock date shapes accepted in addition to RFC 3339, interpreted
/// as UTC
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Resolve an IANA timezone identifier
pub fn resolve_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| LikeGraphError::unknown_timezone(zone))
}

/// Parse a stored date string as a UTC-anchored instant
fn parse_utc_instant(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(LikeGraphError::date_parse(value))
}

/// Project every record down to its `Date` and `Like(s)` fields
///
/// Mirrors the columnar shape of the pipeline: a key missing from any
/// record fails the projection before any value is parsed.
fn project<'a>(records: &'a [RawRecord]) -> Result<Vec<(&'a str, &'a str)>> {
    if records.is_empty() {
        return Err(LikeGraphError::malformed_input(
            "no records to aggregate; the export contained no terminated blocks",
        ));
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let date = record
                .get(DATE_FIELD)
                .ok_or_else(|| LikeGraphError::missing_field(DATE_FIELD, index))?;
            let likes = record
                .get(LIKES_FIELD)
                .ok_or_else(|| LikeGraphError::missing_field(LIKES_FIELD, index))?;
            Ok((date.as_str(), likes.as_str()))
        })
        .collect()
}

/// Build one output row from validated column values
fn build_post_record(instant: DateTime<Utc>, likes: u32, tz: Tz) -> PostRecord {
    let local = instant.with_timezone(&tz);
    PostRecord {
        day_of_week: weekday_name(local.weekday()).to_string(),
        time: local.time(),
        time_period: local.format("%p").to_string(),
        hour: local.hour(),
        hour_12: local.format("%I").to_string(),
        likes,
        date: local,
    }
}

/// Group rows by (day of week, hour of day) and reshape the mean likes
/// into a matrix with Monday-first rows and ascending hour columns
fn build_heat_matrix(table: &[PostRecord]) -> HeatMatrix {
    let mut buckets: HashMap<(Weekday, u32), (u64, u32)> = HashMap::new();
    for row in table {
        let key = (row.date.weekday(), row.hour);
        let bucket = buckets.entry(key).or_insert((0, 0));
        bucket.0 += u64::from(row.likes);
        bucket.1 += 1;
    }

    let mut days: Vec<Weekday> = buckets.keys().map(|(day, _)| *day).collect();
    days.sort_by_key(|day| weekday_index(*day));
    days.dedup();
    let hours: BTreeSet<u32> = buckets.keys().map(|(_, hour)| *hour).collect();

    let means: HashMap<(Weekday, u32), f64> = buckets
        .into_iter()
        .map(|(key, (sum, count))| (key, round2(sum as f64 / f64::from(count))))
        .collect();

    let cells = days
        .iter()
        .map(|day| {
            hours
                .iter()
                .map(|hour| means.get(&(*day, *hour)).copied())
                .collect()
        })
        .collect();

    HeatMatrix {
        days: days
            .into_iter()
            .map(|day| weekday_name(day).to_string())
            .collect(),
        hours: hours.into_iter().collect(),
        cells,
    }
}

/// Sum and mean likes over the whole table
fn build_summary(table: &[PostRecord]) -> LikesSummary {
    let total: u64 = table.iter().map(|row| u64::from(row.likes)).sum();
    let average = round2(total as f64 / table.len() as f64);
    LikesSummary {
        total_likes: total,
        average_likes: average,
    }
}

/// Aggregate extracted records in the given IANA timezone
///
/// Returns the row-per-post table, the day-of-week x hour-of-day mean-likes
/// matrix, and the summary metrics. Steps run columnar like the projection:
/// the zone is resolved before any record is touched, all dates are parsed
/// before any like count, and the first failure aborts the batch.
pub fn aggregate(records: &[RawRecord], zone: &str) -> Result<AggregateOutput> {
    let tz = resolve_zone(zone)?;

    let projected = project(records)?;

    let instants: Vec<DateTime<Utc>> = projected
        .iter()
        .map(|(date, _)| parse_utc_instant(date))
        .collect::<Result<_>>()?;

    let likes: Vec<u32> = projected
        .iter()
        .map(|(_, raw)| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| LikeGraphError::like_count(*raw))
        })
        .collect::<Result<_>>()?;

    let table: Vec<PostRecord> = instants
        .into_iter()
        .zip(likes)
        .map(|(instant, likes)| build_post_record(instant, likes, tz))
        .collect();
    debug!(rows = table.len(), zone = %tz, "validated and converted records");

    let matrix = build_heat_matrix(&table);
    let summary = build_summary(&table);
    info!(
        rows = table.len(),
        days = matrix.days.len(),
        hours = matrix.hours.len(),
        total_likes = summary.total_likes,
        "aggregated like patterns"
    );

    Ok(AggregateOutput {
        timezone: tz.name().to_string(),
        table,
        matrix,
        summary,
    })
}
