use bigdecimal::BigDecimal;
use model::{
    core::{
        filter::QueryFilter, operator::QueryOperator, sql_type::SqlType, value::Value,
        value_type::ValueType,
    },
    tracker::item::{DataElement, TrackedEntityAttribute},
};
use std::str::FromStr;
use tracing_test::traced_test;
use tracker_export::{FilterError, FilterParameter, QueryFilterValue};

fn attribute(value_type: ValueType) -> TrackedEntityAttribute {
    TrackedEntityAttribute::new("TeaUidA0001", value_type)
}

fn decimal(raw: &str) -> Value {
    Value::Decimal(BigDecimal::from_str(raw).unwrap())
}

fn text(raw: &str) -> Value {
    Value::Text(raw.to_string())
}

#[test]
fn test_number_equality_binds_decimal() {
    let filter = QueryFilter::new(QueryOperator::Eq, "42.5");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap();

    assert_eq!(value.sql_operator, "=");
    assert_eq!(value.sql_type(), Some(SqlType::Numeric));
    assert_eq!(value.parameter.values(), &[decimal("42.5")]);
}

#[test]
fn test_number_in_binds_ordered_decimals() {
    let filter = QueryFilter::new(QueryOperator::In, "42.5;17.2;7");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap();

    assert_eq!(value.sql_operator, "in");
    assert_eq!(value.sql_type(), Some(SqlType::Array));
    assert_eq!(
        value.parameter,
        FilterParameter::Array {
            element_type: SqlType::Numeric,
            values: vec![decimal("42.5"), decimal("17.2"), decimal("7")],
        }
    );
}

#[test]
fn test_integer_equality_binds_integer() {
    let filter = QueryFilter::new(QueryOperator::Eq, "42");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Integer)).unwrap();

    assert_eq!(
        value.parameter,
        FilterParameter::Single {
            sql_type: SqlType::Integer,
            value: Value::Integer(42),
        }
    );
}

#[test]
fn test_integer_in_binds_ordered_integers() {
    let filter = QueryFilter::new(QueryOperator::In, "42;17;7");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Integer)).unwrap();

    assert_eq!(
        value.parameter,
        FilterParameter::Array {
            element_type: SqlType::Integer,
            values: vec![Value::Integer(42), Value::Integer(17), Value::Integer(7)],
        }
    );
}

#[test]
fn test_integer_rejects_fraction() {
    let filter = QueryFilter::new(QueryOperator::Eq, "42.5");

    let err = QueryFilterValue::of(&filter, &attribute(ValueType::Integer)).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("value type is numeric but the value"));
    assert!(message.contains("`42.5`"));
    assert!(message.contains("INTEGER"));
}

#[test]
fn test_integer_in_rejects_whole_filter_on_one_bad_operand() {
    let filter = QueryFilter::new(QueryOperator::In, "42;17.5;7");

    let err = QueryFilterValue::of(&filter, &attribute(ValueType::Integer)).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("42;17.5;7"), "{message}");
    assert!(message.contains("INTEGER"), "{message}");
    assert!(message.contains("value type is numeric but the value"));
}

#[test]
fn test_number_rejects_non_numeric() {
    let filter = QueryFilter::new(QueryOperator::Eq, "not-a-number");

    let err = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("is invalid"));
    assert!(message.contains("numeric"));
    assert!(message.contains("not-a-number"));
    assert!(message.contains("NUMBER"));
}

#[test]
fn test_number_in_rejects_non_numeric_operand() {
    let filter = QueryFilter::new(QueryOperator::In, "42.5;not-a-number;7");

    let err = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap_err();

    match err {
        FilterError::InvalidFilterValue {
            uid,
            filter,
            value_type,
            ..
        } => {
            assert_eq!(uid, "TeaUidA0001");
            assert_eq!(filter, "42.5;not-a-number;7");
            assert_eq!(value_type, ValueType::Number);
        }
    }
}

#[test]
fn test_error_names_attribute_or_data_element() {
    let filter = QueryFilter::new(QueryOperator::Eq, "abc");

    let err = QueryFilterValue::of(&filter, &attribute(ValueType::Percentage)).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Filter for attribute TeaUidA0001 is invalid.")
    );

    let de = DataElement::new("DeUidB0002", ValueType::IntegerNegative);
    let err = QueryFilterValue::of(&filter, &de).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Filter for data element DeUidB0002 is invalid.")
    );
    assert!(err.to_string().contains("INTEGER_NEGATIVE"));
}

#[test]
fn test_text_equality_binds_text() {
    let filter = QueryFilter::new(QueryOperator::Eq, "summer day");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Text)).unwrap();

    assert_eq!(
        value.parameter,
        FilterParameter::Single {
            sql_type: SqlType::Varchar,
            value: text("summer day"),
        }
    );
}

#[test]
fn test_text_in_binds_ordered_text() {
    let filter = QueryFilter::new(QueryOperator::In, "summer;winter;spring");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Text)).unwrap();

    assert_eq!(
        value.parameter,
        FilterParameter::Array {
            element_type: SqlType::Varchar,
            values: vec![text("summer"), text("winter"), text("spring")],
        }
    );
}

#[test]
fn test_integer_in_ignores_trailing_separator() {
    let filter = QueryFilter::new(QueryOperator::In, "42;17;");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Integer)).unwrap();

    assert_eq!(
        value.parameter,
        FilterParameter::Array {
            element_type: SqlType::Integer,
            values: vec![Value::Integer(42), Value::Integer(17)],
        }
    );
}

#[test]
fn test_text_in_ignores_trailing_separator_but_keeps_inner_empty() {
    let filter = QueryFilter::new(QueryOperator::In, "a;b;");
    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Text)).unwrap();
    assert_eq!(value.parameter.values(), &[text("a"), text("b")]);

    let filter = QueryFilter::new(QueryOperator::In, "a;;b");
    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Text)).unwrap();
    assert_eq!(value.parameter.values(), &[text("a"), text(""), text("b")]);
}

#[test]
fn test_non_numeric_value_type_is_not_validated() {
    for value_type in [ValueType::Text, ValueType::Email, ValueType::Date] {
        let filter = QueryFilter::new(QueryOperator::Eq, "not-a-number");

        let value = QueryFilterValue::of(&filter, &attribute(value_type)).unwrap();

        assert_eq!(value.sql_type(), Some(SqlType::Varchar));
        assert_eq!(value.parameter.values(), &[text("not-a-number")]);
    }
}

#[test]
fn test_starts_with_appends_wildcard() {
    let filter = QueryFilter::new(QueryOperator::Sw, "summer");

    let value = QueryFilterValue::of(&filter, &attribute(ValueType::Text)).unwrap();

    assert_eq!(value.sql_operator, "like");
    assert_eq!(value.parameter.values(), &[text("summer%")]);
}

#[test]
fn test_pattern_operators_never_parse_numbers() {
    let cases = [
        (QueryOperator::Sw, "4%"),
        (QueryOperator::Ew, "%4"),
        (QueryOperator::Like, "%4%"),
    ];

    for (operator, expected) in cases {
        let filter = QueryFilter::new(operator, "4");

        let value = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap();

        assert_eq!(value.sql_operator, "like");
        assert_eq!(
            value.parameter,
            FilterParameter::Single {
                sql_type: SqlType::Varchar,
                value: text(expected),
            }
        );
    }
}

#[test]
fn test_unary_operator_binds_nothing() {
    for filter in [
        QueryFilter::unary(QueryOperator::NNull),
        QueryFilter::new(QueryOperator::NNull, "not a number"),
    ] {
        let value = QueryFilterValue::of(&filter, &attribute(ValueType::Number)).unwrap();

        assert_eq!(value.operator, QueryOperator::NNull);
        assert_eq!(value.sql_operator, "is not null");
        assert_eq!(value.parameter, FilterParameter::Unbound);
        assert!(!value.parameter.is_bound());
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let filter: QueryFilter = "in:3;1;2".parse().unwrap();
    let tea = attribute(ValueType::IntegerZeroOrPositive);

    let first = QueryFilterValue::of(&filter, &tea).unwrap();
    let second = QueryFilterValue::of(&filter, &tea).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_item_as_trait_object() {
    let items: Vec<Box<dyn model::tracker::item::ValueTypedItem>> = vec![
        Box::new(attribute(ValueType::UnitInterval)),
        Box::new(DataElement::new("DeUidB0002", ValueType::UnitInterval)),
    ];
    let filter = QueryFilter::new(QueryOperator::Le, "0.5");

    for item in &items {
        let value = QueryFilterValue::of(&filter, item.as_ref()).unwrap();
        assert_eq!(value.parameter.values(), &[decimal("0.5")]);
    }
}

#[test]
#[traced_test]
fn test_rejected_filter_is_logged() {
    let filter = QueryFilter::new(QueryOperator::Gt, "ten");

    let result = QueryFilterValue::of(&filter, &attribute(ValueType::Integer));

    assert!(result.is_err());
    assert!(logs_contain("Rejecting filter `gt:ten` on attribute TeaUidA0001"));
}
