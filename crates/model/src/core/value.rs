use crate::core::sql_type::SqlType;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A typed filter operand, ready to be bound as a SQL parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i32),
    Decimal(BigDecimal),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

/// The class of Rust value a declared value type parses into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    Timestamp,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{value}` is not a valid {class}")]
pub struct ValueParseError {
    pub value: String,
    pub class: ValueClass,
}

impl ValueParseError {
    fn new(value: &str, class: ValueClass) -> Self {
        Self {
            value: value.to_string(),
            class,
        }
    }
}

pub type Producer = fn(&str) -> Result<Value, ValueParseError>;

/// Binding tag plus the producer turning raw filter text into a [`Value`].
#[derive(Debug, Clone, Copy)]
pub struct SqlTypeSpec {
    pub sql_type: SqlType,
    pub producer: Producer,
}

impl SqlTypeSpec {
    pub fn produce(&self, raw: &str) -> Result<Value, ValueParseError> {
        (self.producer)(raw)
    }
}

impl ValueClass {
    /// Filter conversion only casts numeric operands, so it reaches the `Integer`, `Decimal`
    /// and `Text` entries. The boolean and temporal entries type values for callers that bind
    /// them directly.
    pub fn spec(&self) -> SqlTypeSpec {
        match self {
            ValueClass::Text => SqlTypeSpec {
                sql_type: SqlType::Varchar,
                producer: parse_text,
            },
            ValueClass::Integer => SqlTypeSpec {
                sql_type: SqlType::Integer,
                producer: parse_integer,
            },
            ValueClass::Decimal => SqlTypeSpec {
                sql_type: SqlType::Numeric,
                producer: parse_decimal,
            },
            ValueClass::Boolean => SqlTypeSpec {
                sql_type: SqlType::Boolean,
                producer: parse_boolean,
            },
            ValueClass::Date => SqlTypeSpec {
                sql_type: SqlType::Date,
                producer: parse_date,
            },
            ValueClass::Timestamp => SqlTypeSpec {
                sql_type: SqlType::Timestamp,
                producer: parse_timestamp,
            },
        }
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueClass::Text => "text",
            ValueClass::Integer => "integer",
            ValueClass::Decimal => "decimal",
            ValueClass::Boolean => "boolean",
            ValueClass::Date => "date",
            ValueClass::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

fn parse_text(raw: &str) -> Result<Value, ValueParseError> {
    Ok(Value::Text(raw.to_string()))
}

fn parse_integer(raw: &str) -> Result<Value, ValueParseError> {
    raw.parse::<i32>()
        .map(Value::Integer)
        .map_err(|_| ValueParseError::new(raw, ValueClass::Integer))
}

fn parse_decimal(raw: &str) -> Result<Value, ValueParseError> {
    // surrounding whitespace is never part of a number
    if raw.is_empty() || raw.trim() != raw {
        return Err(ValueParseError::new(raw, ValueClass::Decimal));
    }
    BigDecimal::from_str(raw)
        .map(Value::Decimal)
        .map_err(|_| ValueParseError::new(raw, ValueClass::Decimal))
}

fn parse_boolean(raw: &str) -> Result<Value, ValueParseError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        _ => Err(ValueParseError::new(raw, ValueClass::Boolean)),
    }
}

fn parse_date(raw: &str) -> Result<Value, ValueParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Value::Date)
        .map_err(|_| ValueParseError::new(raw, ValueClass::Date))
}

fn parse_timestamp(raw: &str) -> Result<Value, ValueParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map(Value::Timestamp)
        .map_err(|_| ValueParseError::new(raw, ValueClass::Timestamp))
}

impl Value {
    pub fn class(&self) -> ValueClass {
        match self {
            Value::Text(_) => ValueClass::Text,
            Value::Integer(_) => ValueClass::Integer,
            Value::Decimal(_) => ValueClass::Decimal,
            Value::Boolean(_) => ValueClass::Boolean,
            Value::Date(_) => ValueClass::Date,
            Value::Timestamp(_) => ValueClass::Timestamp,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        self.class().spec().sql_type
    }
}
