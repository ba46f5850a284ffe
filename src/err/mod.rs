pub mod args;
pub mod cause;
pub mod error;
