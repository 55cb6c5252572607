pub mod filter;
pub mod operator;
pub mod sql_type;
pub mod value;
pub mod value_type;
