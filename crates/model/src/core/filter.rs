use crate::core::operator::QueryOperator;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Separates the operands of a multi-valued (`in`) filter.
pub const OPTION_SEP: char = ';';

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("{0}")]
    UnknownOperator(String),

    #[error("Operator `{0}` requires a value")]
    MissingValue(QueryOperator),
}

/// An operator plus the raw text it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub operator: QueryOperator,
    pub filter: Option<String>,
}

impl QueryFilter {
    pub fn new(operator: QueryOperator, filter: impl Into<String>) -> Self {
        Self {
            operator,
            filter: Some(filter.into()),
        }
    }

    pub fn unary(operator: QueryOperator) -> Self {
        Self {
            operator,
            filter: None,
        }
    }

    pub fn raw(&self) -> &str {
        self.filter.as_deref().unwrap_or_default()
    }

    /// Raw operand strings in input order. `in` filters are split on [`OPTION_SEP`];
    /// trailing empty operands are dropped, inner ones (`a;;b`) are kept.
    pub fn operands(&self) -> Vec<&str> {
        if self.operator.is_unary() {
            return Vec::new();
        }
        let raw = self.raw();
        if !self.operator.is_in() {
            return vec![raw];
        }

        let mut operands: Vec<&str> = raw.split(OPTION_SEP).collect();
        while operands.last().is_some_and(|operand| operand.is_empty()) {
            operands.pop();
        }
        operands
    }
}

/// Parses the request form `op:value`, e.g. `in:a;b;c` or `!null`.
impl FromStr for QueryFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, value) = match s.split_once(':') {
            Some((token, value)) => (token, Some(value)),
            None => (s, None),
        };

        let operator =
            QueryOperator::from_str(token).map_err(FilterParseError::UnknownOperator)?;

        if operator.is_unary() {
            return Ok(QueryFilter::unary(operator));
        }

        match value {
            Some(value) if !value.is_empty() => Ok(QueryFilter::new(operator, value)),
            _ => Err(FilterParseError::MissingValue(operator)),
        }
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(value) if !self.operator.is_unary() => write!(f, "{}:{value}", self.operator),
            _ => write!(f, "{}", self.operator),
        }
    }
}
