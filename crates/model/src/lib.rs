pub mod core;
pub mod tracker;
