use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag a bound parameter carries so the binding layer picks the right SQL type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SqlType {
    Varchar,
    Integer,
    Numeric,
    Boolean,
    Date,
    Timestamp,
    Array,
}

impl SqlType {
    pub fn postgres_name(&self) -> &'static str {
        match self {
            SqlType::Varchar => "VARCHAR",
            SqlType::Integer => "INTEGER",
            SqlType::Numeric => "NUMERIC",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Date => "DATE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Array => "ARRAY",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.postgres_name())
    }
}
