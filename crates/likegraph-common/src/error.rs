//! Error types and utilities for LikeGraph

use thiserror::Error;

/// Result type alias for LikeGraph operations
pub type Result<T> = std::result::Result<T, LikeGraphError>;

/// Main error type for LikeGraph operations
///
/// All four data errors are fatal for the whole batch: aggregation never
/// returns partial output when any record is malformed.
#[derive(Error, Debug)]
pub enum LikeGraphError {
    /// The `Date`/`Like(s)` projection could not be built for every record
    #[error("Malformed input: {message}")]
    MalformedInput {
        message: String,
        field: Option<String>,
    },

    /// A record's date string could not be interpreted as an instant
    #[error("Date parse error: could not interpret {value:?} as a UTC instant")]
    DateParse { value: String },

    /// A record's like count is not a valid non-negative integer
    #[error("Like count parse error: {value:?} is not a non-negative integer")]
    LikeCountParse { value: String },

    /// The supplied zone identifier is not in the IANA timezone database
    #[error("Unknown timezone: {zone:?}")]
    UnknownTimezone { zone: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LikeGraphError {
    /// Create a new malformed input error
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new malformed input error naming the missing field
    pub fn missing_field(field: impl Into<String>, record_index: usize) -> Self {
        let field = field.into();
        Self::MalformedInput {
            message: format!("record {} is missing the {:?} field", record_index, field),
            field: Some(field),
        }
    }

    /// Create a new date parse error
    pub fn date_parse(value: impl Into<String>) -> Self {
        Self::DateParse {
            value: value.into(),
        }
    }

    /// Create a new like count parse error
    pub fn like_count(value: impl Into<String>) -> Self {
        Self::LikeCountParse {
            value: value.into(),
        }
    }

    /// Create a new unknown timezone error
    pub fn unknown_timezone(zone: impl Into<String>) -> Self {
        Self::UnknownTimezone { zone: zone.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}
