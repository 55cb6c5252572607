use crate::relationship::fields::RelationshipItemFields;

const ALL_FIELDS: &str = "*";

/// Requested field paths, as given in a `fields=` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPaths {
    paths: Vec<String>,
    separator: String,
}

impl FieldPaths {
    /// Builds the set from a comma-separated list such as `trackedEntity.attributes,event`.
    pub fn parse(fields: &str, separator: impl Into<String>) -> Self {
        let paths = fields
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            paths,
            separator: separator.into(),
        }
    }

    /// A path is included when it was requested, when an ancestor was requested, or when one
    /// of its descendants was requested (the parent has to be fetched to reach it).
    pub fn includes(&self, path: &str) -> bool {
        self.paths.iter().any(|requested| {
            requested == ALL_FIELDS
                || requested == path
                || self.is_ancestor(requested, path)
                || self.is_ancestor(path, requested)
        })
    }

    pub fn relationship_item_fields(&self) -> RelationshipItemFields {
        RelationshipItemFields::of(|path| self.includes(path), &self.separator)
    }

    /// Without a separator no path is nested under another.
    fn is_ancestor(&self, ancestor: &str, path: &str) -> bool {
        if self.separator.is_empty() {
            return false;
        }
        path.strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with(self.separator.as_str()))
    }
}
