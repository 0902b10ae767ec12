pub mod builder;
pub mod utils;
