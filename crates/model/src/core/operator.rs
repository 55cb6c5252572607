use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Operators accepted in tracker filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryOperator {
    Eq,
    Neq,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    Nlike,
    Ilike,
    Nilike,
    Sw,
    Ew,
    In,
    Null,
    NNull,
}

/// Where the `%` wildcard goes around a pattern operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    None,
    Leading,
    Trailing,
    Both,
}

impl Wildcard {
    pub const MARKER: char = '%';

    pub fn apply(&self, value: &str) -> String {
        match self {
            Wildcard::None => value.to_string(),
            Wildcard::Leading => format!("{}{value}", Self::MARKER),
            Wildcard::Trailing => format!("{value}{}", Self::MARKER),
            Wildcard::Both => format!("{}{value}{}", Self::MARKER, Self::MARKER),
        }
    }
}

impl QueryOperator {
    pub const ALL: [QueryOperator; 15] = [
        QueryOperator::Eq,
        QueryOperator::Neq,
        QueryOperator::Gt,
        QueryOperator::Ge,
        QueryOperator::Lt,
        QueryOperator::Le,
        QueryOperator::Like,
        QueryOperator::Nlike,
        QueryOperator::Ilike,
        QueryOperator::Nilike,
        QueryOperator::Sw,
        QueryOperator::Ew,
        QueryOperator::In,
        QueryOperator::Null,
        QueryOperator::NNull,
    ];

    /// Token used in the `op:value` request syntax.
    pub fn token(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "eq",
            QueryOperator::Neq => "neq",
            QueryOperator::Gt => "gt",
            QueryOperator::Ge => "ge",
            QueryOperator::Lt => "lt",
            QueryOperator::Le => "le",
            QueryOperator::Like => "like",
            QueryOperator::Nlike => "nlike",
            QueryOperator::Ilike => "ilike",
            QueryOperator::Nilike => "nilike",
            QueryOperator::Sw => "sw",
            QueryOperator::Ew => "ew",
            QueryOperator::In => "in",
            QueryOperator::Null => "null",
            QueryOperator::NNull => "!null",
        }
    }

    pub fn sql_operator(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Neq => "!=",
            QueryOperator::Gt => ">",
            QueryOperator::Ge => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Le => "<=",
            QueryOperator::Like | QueryOperator::Sw | QueryOperator::Ew => "like",
            QueryOperator::Nlike => "not like",
            QueryOperator::Ilike => "ilike",
            QueryOperator::Nilike => "not ilike",
            QueryOperator::In => "in",
            QueryOperator::Null => "is null",
            QueryOperator::NNull => "is not null",
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, QueryOperator::Null | QueryOperator::NNull)
    }

    pub fn is_in(&self) -> bool {
        matches!(self, QueryOperator::In)
    }

    /// Operands of these operators are parsed as the field's numeric type when it has one.
    /// Pattern operators always compare text.
    pub fn is_cast_operand(&self) -> bool {
        matches!(
            self,
            QueryOperator::Eq
                | QueryOperator::Neq
                | QueryOperator::Gt
                | QueryOperator::Ge
                | QueryOperator::Lt
                | QueryOperator::Le
                | QueryOperator::In
        )
    }

    pub fn wildcard(&self) -> Wildcard {
        match self {
            QueryOperator::Sw => Wildcard::Trailing,
            QueryOperator::Ew => Wildcard::Leading,
            QueryOperator::Like
            | QueryOperator::Nlike
            | QueryOperator::Ilike
            | QueryOperator::Nilike => Wildcard::Both,
            _ => Wildcard::None,
        }
    }
}

impl FromStr for QueryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        QueryOperator::ALL
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| format!("Unknown query operator: {s}"))
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
