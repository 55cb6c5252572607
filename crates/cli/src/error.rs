use model::core::{filter::FilterParseError, value_type::UnknownValueType};
use thiserror::Error;
use tracker_export::FilterError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse the filter: {0}")]
    FilterParse(#[from] FilterParseError),

    #[error(transparent)]
    UnknownValueType(#[from] UnknownValueType),

    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
