use crate::core::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Attribute,
    DataElement,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Attribute => f.write_str("attribute"),
            ItemKind::DataElement => f.write_str("data element"),
        }
    }
}

/// Something a tracker filter can target: it has an identifier and a declared value type.
pub trait ValueTypedItem {
    fn uid(&self) -> &str;

    fn value_type(&self) -> ValueType;

    fn kind(&self) -> ItemKind;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEntityAttribute {
    pub uid: String,
    pub value_type: ValueType,
}

impl TrackedEntityAttribute {
    pub fn new(uid: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            uid: uid.into(),
            value_type,
        }
    }
}

impl ValueTypedItem for TrackedEntityAttribute {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Attribute
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataElement {
    pub uid: String,
    pub value_type: ValueType,
}

impl DataElement {
    pub fn new(uid: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            uid: uid.into(),
            value_type,
        }
    }
}

impl ValueTypedItem for DataElement {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn kind(&self) -> ItemKind {
        ItemKind::DataElement
    }
}
