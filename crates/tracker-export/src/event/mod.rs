pub mod filter_value;
