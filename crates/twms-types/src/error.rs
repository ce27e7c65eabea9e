//! Error types for the truck weight management system

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Errors raised while reading the line-oriented data file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data file ended early at line {line}: expected {expected}")]
    Truncated { line: usize, expected: &'static str },

    #[error("Invalid number at line {line}: {value:?}")]
    InvalidNumber { line: usize, value: String },

    #[error("Unknown status at line {line}: {value:?}")]
    InvalidStatus { line: usize, value: String },

    #[error("Invalid timestamp at line {line}: {value:?}")]
    InvalidTimestamp { line: usize, value: String },
}

/// Rejected operator input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must fit on a single line")]
    MultiLine { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("Invalid cargo item {0:?}: expected WEIGHT:DESCRIPTION")]
    InvalidCargo(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data file error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Truck not found: #{0}")]
    TruckNotFound(u32),

    #[error("Truck is no longer in the fleet")]
    TruckRemoved,

    #[error("No data available")]
    NoData,

    #[error("Input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_names_line() {
        let err: Error = StoreError::InvalidNumber {
            line: 5,
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Data file error: Invalid number at line 5: \"abc\"");
    }

    #[test]
    fn test_input_error_range_message() {
        let err = InputError::OutOfRange {
            field: "Empty truck weight",
            min: 0,
            max: 10000,
            value: 12000,
        };
        assert_eq!(
            err.to_string(),
            "Empty truck weight must be between 0 and 10000, got 12000"
        );
    }
}
