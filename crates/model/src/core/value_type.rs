use crate::core::value::{SqlTypeSpec, ValueClass};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};
use thiserror::Error;

/// Declared type of a tracked entity attribute or data element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Text,
    LongText,
    Letter,
    PhoneNumber,
    Email,
    Username,
    Url,
    Boolean,
    TrueOnly,
    Date,
    Datetime,
    Time,
    Number,
    UnitInterval,
    Percentage,
    Integer,
    IntegerPositive,
    IntegerNegative,
    IntegerZeroOrPositive,
    Age,
    OrganisationUnit,
    FileResource,
    Image,
    Coordinate,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown value type: {0}")]
pub struct UnknownValueType(pub String);

lazy_static! {
    static ref VALUE_TYPE_MAP: HashMap<&'static str, ValueType> = build_value_type_map();
}

impl ValueType {
    pub const ALL: [ValueType; 24] = [
        ValueType::Text,
        ValueType::LongText,
        ValueType::Letter,
        ValueType::PhoneNumber,
        ValueType::Email,
        ValueType::Username,
        ValueType::Url,
        ValueType::Boolean,
        ValueType::TrueOnly,
        ValueType::Date,
        ValueType::Datetime,
        ValueType::Time,
        ValueType::Number,
        ValueType::UnitInterval,
        ValueType::Percentage,
        ValueType::Integer,
        ValueType::IntegerPositive,
        ValueType::IntegerNegative,
        ValueType::IntegerZeroOrPositive,
        ValueType::Age,
        ValueType::OrganisationUnit,
        ValueType::FileResource,
        ValueType::Image,
        ValueType::Coordinate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Text => "TEXT",
            ValueType::LongText => "LONG_TEXT",
            ValueType::Letter => "LETTER",
            ValueType::PhoneNumber => "PHONE_NUMBER",
            ValueType::Email => "EMAIL",
            ValueType::Username => "USERNAME",
            ValueType::Url => "URL",
            ValueType::Boolean => "BOOLEAN",
            ValueType::TrueOnly => "TRUE_ONLY",
            ValueType::Date => "DATE",
            ValueType::Datetime => "DATETIME",
            ValueType::Time => "TIME",
            ValueType::Number => "NUMBER",
            ValueType::UnitInterval => "UNIT_INTERVAL",
            ValueType::Percentage => "PERCENTAGE",
            ValueType::Integer => "INTEGER",
            ValueType::IntegerPositive => "INTEGER_POSITIVE",
            ValueType::IntegerNegative => "INTEGER_NEGATIVE",
            ValueType::IntegerZeroOrPositive => "INTEGER_ZERO_OR_POSITIVE",
            ValueType::Age => "AGE",
            ValueType::OrganisationUnit => "ORGANISATION_UNIT",
            ValueType::FileResource => "FILE_RESOURCE",
            ValueType::Image => "IMAGE",
            ValueType::Coordinate => "COORDINATE",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueType::Number
                | ValueType::UnitInterval
                | ValueType::Percentage
                | ValueType::Integer
                | ValueType::IntegerPositive
                | ValueType::IntegerNegative
                | ValueType::IntegerZeroOrPositive
        )
    }

    pub fn value_class(&self) -> ValueClass {
        match self {
            ValueType::Integer
            | ValueType::IntegerPositive
            | ValueType::IntegerNegative
            | ValueType::IntegerZeroOrPositive => ValueClass::Integer,
            ValueType::Number | ValueType::UnitInterval | ValueType::Percentage => {
                ValueClass::Decimal
            }
            ValueType::Boolean | ValueType::TrueOnly => ValueClass::Boolean,
            ValueType::Date | ValueType::Age => ValueClass::Date,
            ValueType::Datetime => ValueClass::Timestamp,
            _ => ValueClass::Text,
        }
    }

    pub fn sql_type_spec(&self) -> SqlTypeSpec {
        self.value_class().spec()
    }
}

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        VALUE_TYPE_MAP
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| UnknownValueType(s.to_string()))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn build_value_type_map() -> HashMap<&'static str, ValueType> {
    let mut map = HashMap::new();
    for value_type in ValueType::ALL {
        map.insert(value_type.name(), value_type);
    }
    map
}
