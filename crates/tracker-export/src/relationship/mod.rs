pub mod fields;
pub mod paths;
