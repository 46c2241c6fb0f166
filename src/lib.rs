pub mod batch;
pub mod config;
pub mod convert;
pub mod diagnostic;
pub mod stdio;
pub mod table;

pub use convert::{unicode_to_brf, Converter};
