//! CLI-layer integration tests: settings resolution plus the full
//! extract -> aggregate -> render path

use likegraph_cli::{render_text, Settings, DEFAULT_TIMEZONE};
use likegraph_core::{aggregate, extract};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_EXPORT: &str = "\
Date: 2024-01-15T10:00:00Z
Like(s): 10
Adds yours text: first
Date: 2024-01-15T10:30:00Z
Like(s): 20
Adds yours text: second
";

#[test]
fn test_report_with_default_timezone() {
    let settings = Settings::default();
    let output = aggregate(&extract(SAMPLE_EXPORT), &settings.timezone).unwrap();
    let report = render_text(&output, settings.show_table);

    assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
    assert!(report.contains("Data displayed in: US/Pacific"));
    assert!(report.contains("Total Likes: 30"));
    // 10:00/10:30 UTC in January is 02:00 Pacific, still Monday.
    assert!(report.contains("Monday"));
}

#[test]
fn test_report_with_settings_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "timezone = \"UTC\"").unwrap();
    writeln!(file, "show_table = true").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    let output = aggregate(&extract(SAMPLE_EXPORT), &settings.timezone).unwrap();
    let report = render_text(&output, settings.show_table);

    assert!(report.contains("Processed Data"));
    assert!(report.contains("Data displayed in: UTC"));
    assert!(report.contains("Average Likes: 15.00"));
}

#[test]
fn test_export_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE_EXPORT).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let output = aggregate(&extract(&text), "UTC").unwrap();

    assert_eq!(output.table.len(), 2);
    assert_eq!(output.matrix.get("Monday", 10), Some(15.0));
}

#[test]
fn test_json_output_shape() {
    let output = aggregate(&extract(SAMPLE_EXPORT), "UTC").unwrap();
    let json = serde_json::to_string_pretty(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["timezone"], "UTC");
    assert_eq!(value["summary"]["total_likes"], 30);
    assert_eq!(value["summary"]["average_likes"], 15.0);
    assert_eq!(value["table"].as_array().unwrap().len(), 2);
    assert_eq!(value["table"][0]["day_of_week"], "Monday");
    assert_eq!(value["matrix"]["hours"][0], 10);
}
