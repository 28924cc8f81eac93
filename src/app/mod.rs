pub mod cors;
pub mod env;
pub mod errors;
pub mod models;
