pub mod error;
pub mod event;
pub mod relationship;

pub use error::{FilterError, Result};
pub use event::filter_value::{FilterParameter, QueryFilterValue};
pub use relationship::fields::RelationshipItemFields;
pub use relationship::paths::FieldPaths;
