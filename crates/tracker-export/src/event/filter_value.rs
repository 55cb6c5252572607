use crate::error::{FilterError, Result};
use model::{
    core::{
        filter::QueryFilter,
        operator::QueryOperator,
        sql_type::SqlType,
        value::{SqlTypeSpec, Value, ValueClass},
    },
    tracker::item::ValueTypedItem,
};
use serde::Serialize;
use tracing::{debug, warn};

/// The parameter bound for a converted filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterParameter {
    /// Unary operators such as `is not null` bind nothing.
    Unbound,
    Single { sql_type: SqlType, value: Value },
    /// Operands of an `in` filter, in the order they were given.
    Array {
        element_type: SqlType,
        values: Vec<Value>,
    },
}

impl FilterParameter {
    /// Tag to bind the parameter with; `None` when nothing is bound.
    pub fn sql_type(&self) -> Option<SqlType> {
        match self {
            FilterParameter::Unbound => None,
            FilterParameter::Single { sql_type, .. } => Some(*sql_type),
            FilterParameter::Array { .. } => Some(SqlType::Array),
        }
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self, FilterParameter::Unbound)
    }

    pub fn values(&self) -> &[Value] {
        match self {
            FilterParameter::Unbound => &[],
            FilterParameter::Single { value, .. } => std::slice::from_ref(value),
            FilterParameter::Array { values, .. } => values,
        }
    }
}

/// A tracker filter converted into a SQL operator and a typed, bindable parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFilterValue {
    pub operator: QueryOperator,
    pub sql_operator: &'static str,
    pub parameter: FilterParameter,
}

impl QueryFilterValue {
    /// Converts `filter` for a field of `item`'s value type.
    ///
    /// Operands are parsed as the item's numeric type only when the operator compares values
    /// (`eq`, `gt`, `in`, ...) and the item is numeric; otherwise they stay text, with `%`
    /// added for pattern operators. A single operand that fails to parse rejects the whole
    /// filter.
    pub fn of<I>(filter: &QueryFilter, item: &I) -> Result<Self>
    where
        I: ValueTypedItem + ?Sized,
    {
        let operator = filter.operator;

        if operator.is_unary() {
            debug!(
                "Filter `{}` on {} {} binds no value",
                operator,
                item.kind(),
                item.uid()
            );
            return Ok(Self {
                operator,
                sql_operator: operator.sql_operator(),
                parameter: FilterParameter::Unbound,
            });
        }

        let spec = if operator.is_cast_operand() && item.value_type().is_numeric() {
            item.value_type().sql_type_spec()
        } else {
            ValueClass::Text.spec()
        };

        let parameter = if operator.is_in() {
            let values = filter
                .operands()
                .into_iter()
                .map(|operand| convert(filter, item, &spec, operand))
                .collect::<Result<Vec<_>>>()?;
            FilterParameter::Array {
                element_type: spec.sql_type,
                values,
            }
        } else {
            FilterParameter::Single {
                sql_type: spec.sql_type,
                value: convert(filter, item, &spec, filter.raw())?,
            }
        };

        debug!(
            "Converted filter `{}` on {} {} to {} value(s) of type {}",
            operator,
            item.kind(),
            item.uid(),
            parameter.values().len(),
            spec.sql_type
        );

        Ok(Self {
            operator,
            sql_operator: operator.sql_operator(),
            parameter,
        })
    }

    pub fn sql_type(&self) -> Option<SqlType> {
        self.parameter.sql_type()
    }
}

fn convert<I>(filter: &QueryFilter, item: &I, spec: &SqlTypeSpec, operand: &str) -> Result<Value>
where
    I: ValueTypedItem + ?Sized,
{
    let operand = filter.operator.wildcard().apply(operand);
    spec.produce(&operand).map_err(|source| {
        warn!(
            "Rejecting filter `{}` on {} {}: {}",
            filter,
            item.kind(),
            item.uid(),
            source
        );
        FilterError::InvalidFilterValue {
            kind: item.kind(),
            uid: item.uid().to_string(),
            filter: filter.raw().to_string(),
            value_type: item.value_type(),
            source,
        }
    })
}
