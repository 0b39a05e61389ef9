//! Utility functions used across the LikeGraph pipeline

use chrono::Weekday;

/// Convert a weekday to its canonical display index (Monday = 0, Sunday = 6)
pub fn weekday_index(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

/// Full weekday name as it appears in row labels and the output table
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Round to 2 decimal places, half away from zero
///
/// Like counts are non-negative, so this matches half-up rounding on every
/// value the pipeline produces.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index(Weekday::Mon), 0);
        assert_eq!(weekday_index(Weekday::Tue), 1);
        assert_eq!(weekday_index(Weekday::Wed), 2);
        assert_eq!(weekday_index(Weekday::Thu), 3);
        assert_eq!(weekday_index(Weekday::Fri), 4);
        assert_eq!(weekday_index(Weekday::Sat), 5);
        assert_eq!(weekday_index(Weekday::Sun), 6);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(15.0), 15.0);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(12.344), 12.34);
    }
}
