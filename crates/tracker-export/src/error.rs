use model::{
    core::{value::ValueParseError, value_type::ValueType},
    tracker::item::ItemKind,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error(
        "Filter for {kind} {uid} is invalid. The {kind} value type is numeric but the value `{filter}` is not. Could not convert to value type {value_type}."
    )]
    InvalidFilterValue {
        kind: ItemKind,
        uid: String,
        filter: String,
        value_type: ValueType,
        #[source]
        source: ValueParseError,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
